//! Pixel-snow canvas.
//!
//! The canvas tracks its parent's size and an animation-frame loop steps the
//! particle field once per display refresh, drawing every particle as a
//! filled square at its floored position. The loop runs until the page is
//! torn down.

use std::cell::RefCell;
use std::rc::Rc;

use frostvale::particles::{ParticleField, PARTICLE_COUNT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn start_snowfield(canvas_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = window
        .document()
        .and_then(|d| d.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        return;
    };

    let (w, h) = size_to_parent(&canvas);
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(PARTICLE_COUNT, w, h, seed)));

    // Follow the hero section through window resizes.
    {
        let canvas = canvas.clone();
        let field = Rc::clone(&field);
        let cb = Closure::wrap(Box::new(move || {
            let (w, h) = size_to_parent(&canvas);
            field.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // Self-rescheduling animation-frame loop. The closure holds its own
    // handle through `raf`, which keeps it alive for the page's lifetime.
    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_inner = Rc::clone(&raf);
    let win = window.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            field.step();
            if let Err(err) = draw_field(&canvas, &field) {
                web_sys::console::error_1(&err.into());
                return; // stop rescheduling; the canvas is unusable
            }
        }
        if let Some(cb) = raf_inner.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = raf.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Sizes the canvas backing store to its parent element and reports the new
/// dimensions.
fn size_to_parent(canvas: &web_sys::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = canvas
        .parent_element()
        .and_then(|p| p.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|p| (p.offset_width().max(1) as u32, p.offset_height().max(1) as u32))
        .unwrap_or((1, 1));
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

fn draw_field(
    canvas: &web_sys::HtmlCanvasElement,
    field: &ParticleField,
) -> Result<(), String> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())?;

    ctx.clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

    for p in field.particles() {
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {:.2})", p.opacity));
        ctx.fill_rect(
            p.x.floor() as f64,
            p.y.floor() as f64,
            p.size as f64,
            p.size as f64,
        );
    }

    Ok(())
}
