//! Fixed toast container rendering the shared notification list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Pages raise toasts through
//! [`Notifier`](crate::util::notify::Notifier); this component only renders
//! what the shared state holds and forwards dismiss clicks.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, Panel};
use crate::util::notify::Notifier;

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✕",
        NotificationKind::Warning => "!",
        NotificationKind::Info => "i",
        NotificationKind::Loading => "…",
    }
}

/// Toast stack; absent from the DOM while there is nothing to show.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = Notifier::expect();

    view! {
        <Show when=move || !notifier.is_empty()>
            <div class="toast-stack" role="status" aria-live="polite">
                <For
                    each=move || notifier.panels()
                    key=|panel| panel.id
                    children=move |panel| view! { <ToastPanel panel=panel/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ToastPanel(panel: Panel) -> impl IntoView {
    let notifier = Notifier::expect();
    let id = panel.id;
    let kind = panel.notification.kind;
    let duration_ms = panel.notification.duration_ms;

    let class = move || {
        let closing = if notifier.is_closing(id) { " toast--closing" } else { "" };
        format!("toast toast--{}{closing}", kind.as_str())
    };

    view! {
        <div class=class on:click=move |_| notifier.dismiss(id)>
            <span class="toast__icon" aria-hidden="true">{icon(kind)}</span>
            <div class="toast__body">
                {panel.notification.title.map(|title| view! { <strong class="toast__title">{title}</strong> })}
                <p class="toast__message">{panel.notification.message}</p>
            </div>
            <button
                class="toast__close"
                title="Fechar"
                on:click=move |ev| {
                    ev.stop_propagation();
                    notifier.dismiss(id);
                }
            >
                "×"
            </button>
            <Show when=move || { duration_ms > 0 }>
                <div
                    class="toast__progress"
                    style=format!("animation-duration: {duration_ms}ms")
                ></div>
            </Show>
        </div>
    }
}
