//! Scroll-driven behavior: smooth anchor navigation, hero parallax and
//! background blur, active-link highlighting, and the reveal-on-scroll
//! observer. Every handler is stateless per event; the math lives in
//! `frostvale::effects`.

use frostvale::effects::{active_section, background_blur_px, hero_parallax};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Page sections, in document order. Used for active-link highlighting.
pub(super) const SECTION_IDS: [&str; 4] = ["home", "features", "rules", "join"];

/// Smooth-scrolls to a section, compensating for the fixed navbar height.
pub(super) fn smooth_scroll_to(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };

    let nav_height = html_by_id(&document, "navbar")
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + scroll_y - nav_height;

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Installs the window scroll listener. The page scrolls for its whole
/// lifetime, so the listener is never removed.
pub(super) fn install_scroll_effects(set_active_id: WriteSignal<String>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let win = window.clone();
    let cb = Closure::wrap(Box::new(move || {
        let Some(document) = win.document() else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let viewport_h = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        // Hero parallax + fade, only while the hero is still in view.
        if let Some(hero) = html_by_id(&document, "hero-content") {
            if let Some(p) = hero_parallax(scroll_y, viewport_h) {
                let style = hero.style();
                let _ = style.set_property(
                    "transform",
                    &format!("translateY({:.1}px)", p.translate_y_px),
                );
                let _ = style.set_property("opacity", &format!("{:.3}", p.opacity));
            }
        }

        // Background blur deepens with scroll depth.
        if let Some(bg) = html_by_id(&document, "page-background") {
            let _ = bg
                .style()
                .set_property("filter", &format!("blur({:.1}px)", background_blur_px(scroll_y)));
        }

        // Active nav link follows the section under the viewport.
        let tops: Vec<(String, f64)> = SECTION_IDS
            .iter()
            .filter_map(|id| {
                let el = document.get_element_by_id(id)?;
                Some((
                    (*id).to_string(),
                    el.get_bounding_client_rect().top() + scroll_y,
                ))
            })
            .collect();
        if let Some(active) = active_section(scroll_y, &tops) {
            set_active_id.set(active.to_string());
        }
    }) as Box<dyn FnMut()>);

    let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Fades in `.reveal` elements the first time they intersect the viewport.
/// Each element animates once and is then unobserved.
pub(super) fn observe_reveals() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    cb.forget();

    let nodes = document.get_elements_by_class_name("reveal");
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i) {
            observer.observe(&el);
        }
    }
}

fn html_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}
