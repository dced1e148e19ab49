//! Login page with email prefill and demo password recovery.

use leptos::prelude::*;

use crate::auth::guard::Page;
use crate::auth::login::{self, LOGIN_SUCCESS, LoginError, LoginForm};
use crate::auth::recovery::RecoveredCredentials;
use crate::auth::{Field, FieldErrors};
use crate::components::form_field::{FieldMessage, PasswordInput, wrapper_class};
use crate::components::recovery_modal::{PasswordRevealModal, RecoveryModal};
use crate::config::{LINK_REDIRECT_MS, LOGIN_PROCESSING_MS, LOGIN_REDIRECT_MS};
use crate::state::auth::AuthState;
use crate::storage;
use crate::util::notify::Notifier;
use crate::util::{browser, timer};

#[component]
pub fn LoginPage() -> impl IntoView {
    let notifier = Notifier::expect();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let recovery_open = RwSignal::new(false);
    let revealed = RwSignal::new(None::<RecoveredCredentials>);

    // Storage is browser-only; prefill once hydrated.
    Effect::new(move || match storage::open_accounts() {
        Ok(store) => {
            let prefilled = login::prefill(&store);
            email.set(prefilled.email);
            remember.set(prefilled.remember);
        }
        Err(e) => log::warn!("login prefill skipped: {e}"),
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        if let Err(field_errors) = login::validate(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);
        let loading = notifier.loading("Verificando credenciais...");

        timer::after(LOGIN_PROCESSING_MS, move || {
            notifier.dismiss(loading);
            let result = storage::open_accounts()
                .map_err(LoginError::from)
                .and_then(|store| login::login(&store, &form));
            match result {
                Ok(user) => {
                    auth.set(AuthState { user: Some(user) });
                    notifier.success(LOGIN_SUCCESS);
                    timer::after(LOGIN_REDIRECT_MS, move || {
                        notifier.dismiss_all();
                        browser::replace_location(Page::Dashboard.path());
                    });
                }
                Err(LoginError::Invalid(field_errors)) => {
                    errors.set(field_errors);
                    busy.set(false);
                }
                Err(e) => {
                    log::info!("[auth] login failed: {e}");
                    notifier.error(e.message());
                    match e.redirect() {
                        Some(page) => {
                            timer::after(LOGIN_REDIRECT_MS, move || browser::navigate_to(page.path()));
                        }
                        None => busy.set(false),
                    }
                }
            }
        });
    };

    let on_recovered = Callback::new(move |credentials: RecoveredCredentials| {
        email.set(credentials.email.clone());
        password.set(credentials.password.clone());
        errors.set(FieldErrors::default());
        revealed.set(Some(credentials));
    });

    let on_register_link = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        notifier.info("Redirecionando para o cadastro...");
        timer::after(LINK_REDIRECT_MS, || browser::navigate_to("/register"));
    };

    let on_social = move |provider: &'static str| {
        notifier.info(format!("Conectando com {provider}..."));
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <a href="/" class="logo">"Flow"<span>"Pilot"</span></a>
                <h1>"Bem-vindo de volta"</h1>
                <p class="auth-subtitle">"Entre para acessar seu painel."</p>

                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class=wrapper_class(errors, Field::Email)>
                        <label for="email">"E-mail"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldMessage errors=errors field=Field::Email/>
                    </div>

                    <div class=wrapper_class(errors, Field::Password)>
                        <label for="password">"Senha"</label>
                        <PasswordInput value=password id="password" placeholder="Sua senha"/>
                        <FieldMessage errors=errors field=Field::Password/>
                    </div>

                    <div class="form-options">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| remember.set(event_target_checked(&ev))
                            />
                            "Lembrar de mim"
                        </label>
                        <button type="button" class="link-button" on:click=move |_| recovery_open.set(true)>
                            "Esqueceu a senha?"
                        </button>
                    </div>

                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="auth-divider"><span>"ou"</span></div>
                <div class="social-buttons">
                    <button type="button" class="btn btn-social" on:click=move |_| on_social("Google")>
                        "Google"
                    </button>
                    <button type="button" class="btn btn-social" on:click=move |_| on_social("Microsoft")>
                        "Microsoft"
                    </button>
                </div>

                <p class="auth-switch">
                    "Não tem uma conta? "
                    <a href="/register" on:click=on_register_link>"Cadastre-se"</a>
                </p>
            </div>
            <RecoveryModal open=recovery_open on_recovered=on_recovered/>
            <PasswordRevealModal credentials=revealed/>
        </main>
    }
}
