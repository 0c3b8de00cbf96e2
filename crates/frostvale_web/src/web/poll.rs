//! Status poller.
//!
//! One fetch at startup, then a fixed 30-second interval. Each firing spawns
//! an independent fetch task: a slow response may overlap the next firing (no
//! de-duplication), and the last write wins — safe because the view state is
//! replaced wholesale, never merged. No failure escapes a poll cycle; every
//! path converges on the offline placeholder.

use frostvale::status::{decode_status, STATUS_ENDPOINT};
use frostvale::view::StatusView;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

const POLL_INTERVAL_MS: i32 = 30_000;

pub(super) fn start_status_polling(set_view: WriteSignal<StatusView>) {
    spawn_poll(set_view);

    let Some(window) = web_sys::window() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move || spawn_poll(set_view)) as Box<dyn FnMut()>);
    match window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            POLL_INTERVAL_MS,
        ) {
        // The poller runs for the page's lifetime; the timer is never cleared.
        Ok(_id) => cb.forget(),
        Err(_) => web_sys::console::error_1(&"status: failed to start poll timer".into()),
    }
}

fn spawn_poll(set_view: WriteSignal<StatusView>) {
    spawn_local(async move {
        let view = match fetch_status_body(STATUS_ENDPOINT).await {
            Ok(body) => StatusView::from_status(&decode_status(&body)),
            Err(err) => {
                web_sys::console::warn_1(&format!("status poll failed: {err}").into());
                StatusView::offline()
            }
        };
        set_view.set(view);
    });
}

async fn fetch_status_body(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| "fetch rejected".to_string())?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch: not a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("http status {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| "text() threw".to_string())?)
        .await
        .map_err(|_| "body read failed".to_string())?;

    text.as_string()
        .ok_or("body is not a string".to_string())
}
