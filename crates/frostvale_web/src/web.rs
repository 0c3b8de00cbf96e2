use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use frostvale::view::StatusView;

mod canvas;
mod clipboard;
mod poll;
mod scroll;
mod shell;

use shell::{FeaturesSection, Footer, Hero, JoinSection, Navbar, RulesSection};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let (status_view, set_status_view) = signal(StatusView::offline());
    let menu_open = RwSignal::new(false);
    let (active_id, set_active_id) = signal("home".to_string());

    // Fetch immediately and then on a fixed cadence for the page's lifetime.
    poll::start_status_polling(set_status_view);
    schedule_page_init(set_active_id);

    view! {
        <div id="page-background"></div>
        <Navbar menu_open=menu_open active_id=active_id />
        <main>
            <Hero status=status_view />
            <FeaturesSection />
            <RulesSection />
            <JoinSection status=status_view />
        </main>
        <Footer />
    }
}

/// DOM-dependent hookups (scroll effects, reveal observer, snow canvas) run
/// one frame after mount so every element they look up is attached.
fn schedule_page_init(set_active_id: WriteSignal<String>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        scroll::install_scroll_effects(set_active_id);
        scroll::observe_reveals();
        canvas::start_snowfield("pixel-snow-canvas");
    });
    let _ = window.request_animation_frame(cb.unchecked_ref());
}
