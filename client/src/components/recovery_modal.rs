//! Password recovery dialogs for the login page.
//!
//! INSECURE, DEMO ONLY: the reveal dialog prints the stored plaintext
//! password. See [`crate::auth::recovery`].

use leptos::prelude::*;

use crate::auth::recovery::{self, RecoveredCredentials, RecoveryError};
use crate::auth::{Field, FieldErrors};
use crate::components::form_field::{FieldMessage, wrapper_class};
use crate::storage;
use crate::util::browser;
use crate::util::notify::Notifier;

/// Email prompt. Calls `on_recovered` and closes itself on a match.
#[component]
pub fn RecoveryModal(open: RwSignal<bool>, on_recovered: Callback<RecoveredCredentials>) -> impl IntoView {
    let notifier = Notifier::expect();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let close = move || {
        open.set(false);
        errors.set(FieldErrors::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        errors.set(FieldErrors::default());
        let result = storage::open_accounts()
            .map_err(RecoveryError::from)
            .and_then(|store| recovery::recover(&store, &email.get_untracked()));
        match result {
            Ok(credentials) => {
                close();
                email.set(String::new());
                on_recovered.run(credentials);
            }
            Err(RecoveryError::Invalid(field_errors)) => errors.set(field_errors),
            Err(e) => {
                log::info!("[auth] recovery failed: {e}");
                if e.closes_modal() {
                    notifier.warning(e.message());
                    close();
                } else {
                    notifier.error(e.message());
                }
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-labelledby="recovery-title"
                    tabindex="0"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button class="modal__close" title="Fechar" on:click=move |_| close()>
                        "×"
                    </button>
                    <h2 id="recovery-title">"Recuperar senha"</h2>
                    <p class="modal__subtitle">"Informe o e-mail usado no cadastro."</p>
                    <form on:submit=on_submit novalidate>
                        <div class=wrapper_class(errors, Field::RecoveryEmail)>
                            <input
                                id="recoveryEmail"
                                type="email"
                                placeholder="seu@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field=Field::RecoveryEmail/>
                        </div>
                        <button class="btn btn-primary btn-block" type="submit">
                            "Recuperar"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Dialog showing recovered credentials with a copy action.
#[component]
pub fn PasswordRevealModal(credentials: RwSignal<Option<RecoveredCredentials>>) -> impl IntoView {
    let notifier = Notifier::expect();
    let close = move || credentials.set(None);

    let on_copy = move |_| {
        let Some(password) = credentials.with_untracked(|c| c.as_ref().map(|c| c.password.clone())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            if browser::copy_to_clipboard(&password).await {
                notifier.success("Senha copiada para a área de transferência.");
            } else {
                notifier.error("Não foi possível copiar a senha.");
            }
        });
    };

    view! {
        <Show when=move || credentials.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <button class="modal__close" title="Fechar" on:click=move |_| close()>
                        "×"
                    </button>
                    <h2>"Senha encontrada"</h2>
                    <p class="modal__subtitle">
                        {move || credentials.with(|c| c.as_ref().map(|c| c.email.clone()).unwrap_or_default())}
                    </p>
                    <div class="password-reveal">
                        <code>
                            {move || credentials.with(|c| c.as_ref().map(|c| c.password.clone()).unwrap_or_default())}
                        </code>
                        <button class="btn btn-outline" type="button" on:click=on_copy>
                            "Copiar"
                        </button>
                    </div>
                    <p class="modal__note">"Os campos de login foram preenchidos para você."</p>
                </div>
            </div>
        </Show>
    }
}
