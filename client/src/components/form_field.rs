//! Small form building blocks shared by the auth pages.

use leptos::prelude::*;

use crate::auth::{Field, FieldErrors};

/// Inline error under an input; renders nothing when `field` is valid.
#[component]
pub fn FieldMessage(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    view! {
        {move || {
            errors
                .with(|e| e.message_for(field))
                .map(|message| view! { <span class="error-message">{message}</span> })
        }}
    }
}

/// Class for an input wrapper, flagged when `field` has an error.
pub fn wrapper_class(errors: RwSignal<FieldErrors>, field: Field) -> impl Fn() -> &'static str {
    move || {
        if errors.with(|e| e.has(field)) {
            "input-wrapper error"
        } else {
            "input-wrapper"
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                id=id
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                autocomplete=autocomplete.unwrap_or("current-password")
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-input__toggle"
                title=move || if visible.get() { "Ocultar senha" } else { "Mostrar senha" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
