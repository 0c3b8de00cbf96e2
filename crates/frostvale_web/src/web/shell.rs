//! Page components. All DOM writes for the status widgets happen here, from
//! a pre-derived `StatusView` — the components never inspect a raw snapshot.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use frostvale::effects::{card_tilt, CARD_REST_TRANSFORM};
use frostvale::status::SERVER_ADDRESS;
use frostvale::view::{StatusView, NO_PLAYERS_PLACEHOLDER};

use super::{clipboard, scroll};

const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("features", "Features"),
    ("rules", "Rules"),
    ("join", "Join"),
];

#[component]
pub(super) fn Navbar(
    menu_open: RwSignal<bool>,
    active_id: ReadSignal<String>,
) -> impl IntoView {
    view! {
        <nav class="navbar" id="navbar">
            <a class="nav-logo" href="#home" on:click=nav_click(menu_open, "home")>
                "Frostvale"
            </a>
            <button
                class=move || if menu_open.get() { "hamburger active" } else { "hamburger" }
                aria-label="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <ul class=move || if menu_open.get() { "nav-menu active" } else { "nav-menu" }>
                {NAV_LINKS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a
                                    class=move || {
                                        if active_id.get() == id { "nav-link active" } else { "nav-link" }
                                    }
                                    href=format!("#{id}")
                                    on:click=nav_click(menu_open, id)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Nav links close the mobile menu and smooth-scroll to their section.
fn nav_click(
    menu_open: RwSignal<bool>,
    id: &'static str,
) -> impl FnMut(leptos::ev::MouseEvent) + 'static {
    move |ev| {
        ev.prevent_default();
        menu_open.set(false);
        scroll::smooth_scroll_to(id);
    }
}

#[component]
pub(super) fn Hero(status: ReadSignal<StatusView>) -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <canvas id="pixel-snow-canvas"></canvas>
            <div class="hero-content" id="hero-content">
                <h1>"Frostvale"</h1>
                <p class="hero-tagline">"A survival realm above the snowline."</p>
                <div class="hero-status" id="hero-status">
                    <span class=move || {
                        if status.get().online { "status-dot online" } else { "status-dot offline" }
                    }></span>
                    <span class="status-text">{move || status.get().hero_text}</span>
                </div>
                <CopyButton text=SERVER_ADDRESS label="Copy IP" />
            </div>
        </section>
    }
}

#[component]
pub(super) fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <h2 class="reveal">"What awaits you"</h2>
            <div class="card-grid">
                <TiltCard
                    title="Untamed peaks"
                    body="A hand-carved mountain world with caverns, glaciers and ruins to claim."
                />
                <TiltCard
                    title="Seasonal events"
                    body="Server-wide hunts and build contests every few weeks, no grinding required."
                />
                <TiltCard
                    title="Fair economy"
                    body="Player-run shops and zero pay-to-win. Everything in the store is cosmetic."
                />
            </div>
        </section>
    }
}

#[component]
pub(super) fn RulesSection() -> impl IntoView {
    view! {
        <section class="rules" id="rules">
            <h2 class="reveal">"House rules"</h2>
            <div class="card-grid">
                <TiltCard title="Keep it friendly" body="No harassment, slurs or drama-farming." />
                <TiltCard title="No cheats" body="Hacked clients and exploit abuse are a permanent ban." />
                <TiltCard title="Build considerately" body="Leave room around other players' claims." />
            </div>
        </section>
    }
}

/// Card with the 3D pointer-tilt effect. The transform is derived fresh from
/// geometry on every mouse-move; leaving the card restores the rest pose.
#[component]
fn TiltCard(title: &'static str, body: &'static str) -> impl IntoView {
    let on_move = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let tilt = card_tilt(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        );
        let _ = el.style().set_property("transform", &tilt.transform());
    };

    let on_leave = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let _ = el.style().set_property("transform", CARD_REST_TRANSFORM);
    };

    view! {
        <article class="card reveal" on:mousemove=on_move on:mouseleave=on_leave>
            <h3>{title}</h3>
            <p>{body}</p>
        </article>
    }
}

#[component]
pub(super) fn JoinSection(status: ReadSignal<StatusView>) -> impl IntoView {
    view! {
        <section class="join" id="join">
            <h2 class="reveal">"Join the server"</h2>
            <div class="join-address reveal">
                <code>{SERVER_ADDRESS}</code>
                <CopyButton text=SERVER_ADDRESS label="Copy" />
            </div>
            <StatusPanel status=status />
        </section>
    }
}

/// Live status widget: indicator, player count, version, MOTD and the player
/// avatar list. Idempotent: re-rendering the same view changes nothing.
#[component]
fn StatusPanel(status: ReadSignal<StatusView>) -> impl IntoView {
    view! {
        <div class="status-panel reveal">
            <div class="status-row">
                <span class=move || status.get().dot_class></span>
                <span class="status-label" style:color=move || status.get().status_color>
                    {move || status.get().status_text}
                </span>
                <span class="player-count">
                    {move || status.get().player_count_text}
                    " players"
                </span>
            </div>
            <Show when=move || status.get().version_text.is_some()>
                <div class="version-info">
                    {move || status.get().version_text.unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || status.get().motd_markup.is_some()>
                <div
                    class="motd"
                    inner_html=move || status.get().motd_markup.unwrap_or_default()
                ></div>
            </Show>
            <div class="player-list">
                <Show
                    when=move || !status.get().players.is_empty()
                    fallback=|| {
                        view! { <span class="player-list-empty">{NO_PLAYERS_PLACEHOLDER}</span> }
                    }
                >
                    <For
                        each=move || status.get().players.into_iter().enumerate()
                        key=|(i, p)| (*i, p.src.clone())
                        children=|(_i, p)| {
                            view! {
                                <img
                                    class="player-head"
                                    src=p.src.clone()
                                    alt=p.label.clone()
                                    title=p.label
                                />
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

/// Copy button with a two-second confirmation state.
#[component]
fn CopyButton(text: &'static str, label: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    view! {
        <button
            class=move || if copied.get() { "copy-btn copied" } else { "copy-btn" }
            on:click=move |_| clipboard::copy_address(text.to_string(), set_copied)
        >
            <span class="copy-icon">{move || if copied.get() { "✔" } else { "⧉" }}</span>
            <span>{label}</span>
        </button>
    }
}

#[component]
pub(super) fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"© 2025 Frostvale. Not affiliated with Mojang or Microsoft."</span>
        </footer>
    }
}
