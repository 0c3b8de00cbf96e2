//! Copy-to-clipboard for the server address.
//!
//! Async clipboard write first; on rejection, a synchronous
//! selection-and-copy fallback. If both fail, the failure is logged and
//! surfaced to no one. On success the button shows a confirmation state for
//! two seconds, then reverts.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

const CONFIRM_MS: i32 = 2_000;

/// Copies `text` and drives the button's confirmation signal. Each
/// invocation schedules its own revert; reverts are idempotent writes of
/// `false`, so rapid repeat clicks cannot collide.
pub(super) fn copy_address(text: String, set_copied: WriteSignal<bool>) {
    spawn_local(async move {
        if write_clipboard(&text).await || fallback_copy(&text) {
            set_copied.set(true);
            schedule_revert(set_copied);
        } else {
            web_sys::console::error_1(&"clipboard: copy failed".into());
        }
    });
}

async fn write_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    JsFuture::from(window.navigator().clipboard().write_text(text))
        .await
        .is_ok()
}

/// Selection-and-copy fallback for clipboards behind permission prompts or
/// non-secure contexts.
fn fallback_copy(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(area) = document
        .create_element("textarea")
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().map_err(Into::into))
    else {
        return false;
    };

    area.set_value(text);
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);

    let _ = body.remove_child(&area);
    copied
}

fn schedule_revert(set_copied: WriteSignal<bool>) {
    let Some(window) = web_sys::window() else {
        set_copied.set(false);
        return;
    };
    let cb = Closure::once_into_js(move || set_copied.set(false));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), CONFIRM_MS)
        .is_err()
    {
        set_copied.set(false);
    }
}
