//! Site header with the mobile navigation drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by every public page. Reads and writes the `ChromeState` context;
//! window scroll and touch listeners are installed on hydration only.

use leptos::prelude::*;

use crate::state::chrome::{AnchorAction, ChromeState, HAPTIC_PULSE_MS, anchor_action};
use crate::util::browser;

/// One entry in the primary navigation.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const HOME_LINKS: &[NavLink] = &[
    NavLink { href: "#features", label: "Recursos" },
    NavLink { href: "#how-it-works", label: "Como funciona" },
    NavLink { href: "#testimonials", label: "Depoimentos" },
    NavLink { href: "/pricing", label: "Preços" },
];

pub const SITE_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Início" },
    NavLink { href: "/pricing", label: "Preços" },
    NavLink { href: "/dashboard", label: "Painel" },
];

fn set_drawer(chrome: RwSignal<ChromeState>, open: bool) {
    let mut changed = false;
    chrome.update(|c| {
        changed = if open { c.open_drawer() } else { c.close_drawer() };
    });
    if changed {
        browser::lock_body_scroll(open);
        if open {
            browser::vibrate(HAPTIC_PULSE_MS);
        }
    }
}

/// Follow an in-page `href`. Returns `false` for links the browser should
/// handle itself.
pub fn follow_anchor(chrome: RwSignal<ChromeState>, href: &str) -> bool {
    let target_top = href.strip_prefix('#').and_then(browser::element_offset_top);
    match anchor_action(href, browser::scroll_top(), target_top) {
        AnchorAction::Ignore => return href.starts_with('#'),
        AnchorAction::Stay => {}
        AnchorAction::ScrollTo(top) => browser::smooth_scroll_to(top),
    }
    set_drawer(chrome, false);
    true
}

#[component]
pub fn SiteHeader(links: &'static [NavLink]) -> impl IntoView {
    let chrome = expect_context::<RwSignal<ChromeState>>();

    #[cfg(feature = "hydrate")]
    install_window_listeners(chrome);

    let on_link = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if href.starts_with('#') {
            ev.prevent_default();
            follow_anchor(chrome, href);
        } else {
            set_drawer(chrome, false);
        }
    };

    view! {
        <header class="site-header" class:site-header--hidden=move || chrome.with(|c| c.header_hidden)>
            <nav class="navbar container">
                <a href="/" class="logo">"Flow"<span>"Pilot"</span></a>
                <button
                    class="mobile-menu"
                    aria-label="Abrir menu"
                    aria-expanded=move || chrome.with(|c| c.drawer_open).to_string()
                    on:click=move |_| {
                        let open = !chrome.with_untracked(|c| c.drawer_open);
                        set_drawer(chrome, open);
                    }
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div
                    class="nav-overlay"
                    class:active=move || chrome.with(|c| c.drawer_open)
                    on:click=move |_| set_drawer(chrome, false)
                ></div>
                <div class="nav-drawer" class:active=move || chrome.with(|c| c.drawer_open)>
                    <button
                        class="nav-drawer__close"
                        aria-label="Fechar menu"
                        on:click=move |_| set_drawer(chrome, false)
                    >
                        "×"
                    </button>
                    <ul class="nav-links">
                        {links
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <li>
                                        <a href=href on:click=move |ev| on_link(ev, href)>
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="auth-buttons">
                        <a href="/login" class="btn btn-outline" on:click=move |_| set_drawer(chrome, false)>
                            "Entrar"
                        </a>
                        <a href="/register" class="btn btn-primary" on:click=move |_| set_drawer(chrome, false)>
                            "Cadastre-se"
                        </a>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[cfg(feature = "hydrate")]
fn install_window_listeners(chrome: RwSignal<ChromeState>) {
    use crate::state::chrome::{Swipe, TouchPoint, classify_swipe};

    let touch_start = RwSignal::new(None::<TouchPoint>);

    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let top = browser::scroll_top();
        chrome.update(|c| c.on_scroll(top));
    });
    let touch_begin = window_event_listener(leptos::ev::touchstart, move |ev| {
        touch_start.set(touch_point(&ev.touches(), ev.time_stamp()));
    });
    let touch_end = window_event_listener(leptos::ev::touchend, move |ev| {
        let begin = touch_start.get_untracked();
        touch_start.set(None);
        let (Some(begin), Some(end)) = (begin, touch_point(&ev.changed_touches(), ev.time_stamp())) else {
            return;
        };
        let open = chrome.with_untracked(|c| c.drawer_open);
        if let Some(swipe) = classify_swipe(begin, end, open) {
            set_drawer(chrome, swipe == Swipe::Open);
        }
    });

    on_cleanup(move || {
        scroll.remove();
        touch_begin.remove();
        touch_end.remove();
        chrome.try_update(ChromeState::leave_page);
        browser::lock_body_scroll(false);
    });
}

#[cfg(feature = "hydrate")]
fn touch_point(touches: &web_sys::TouchList, at_ms: f64) -> Option<crate::state::chrome::TouchPoint> {
    let touch = touches.get(0)?;
    Some(crate::state::chrome::TouchPoint {
        x: f64::from(touch.client_x()),
        y: f64::from(touch.client_y()),
        at_ms,
    })
}
