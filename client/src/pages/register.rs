//! Signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collects the form, shows inline errors immediately, then simulates a
//! server round trip before handing the form to
//! [`crate::auth::register::register`]. A busy flag keeps repeated submits
//! from stacking timers.

use leptos::prelude::*;

use crate::auth::register::{
    self, EMAIL_TAKEN_FIELD, EMAIL_TAKEN_NOTICE, RegisterError, RegistrationForm, SIGNUP_SUCCESS,
    TERMS_REQUIRED,
};
use crate::auth::{Field, FieldErrors};
use crate::components::form_field::{FieldMessage, PasswordInput, wrapper_class};
use crate::config::{LINK_REDIRECT_MS, SIGNUP_PROCESSING_MS, SIGNUP_REDIRECT_MS};
use crate::profile::ROLE_DEPARTMENTS;
use crate::storage;
use crate::util::notify::Notifier;
use crate::util::password_strength::PasswordStrength;
use crate::util::phone_mask::format_phone;
use crate::util::{browser, clock, timer};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notifier = Notifier::expect();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let strength = Memo::new(move |_| PasswordStrength::of(&password.get()));

    let collect = move || RegistrationForm {
        first_name: first_name.get_untracked(),
        last_name: last_name.get_untracked(),
        email: email.get_untracked(),
        phone: phone.get_untracked(),
        password: password.get_untracked(),
        confirm_password: confirm_password.get_untracked(),
        role: role.get_untracked(),
        company: company.get_untracked(),
        terms_accepted: terms.get_untracked(),
    }
    .trimmed();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = collect();
        if let Err(invalid) = register::validate(&form) {
            errors.set(invalid.errors);
            if invalid.terms_rejected {
                notifier.warning_titled("Termos de uso", TERMS_REQUIRED);
            }
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);
        let loading = notifier.loading("Criando sua conta...");

        timer::after(SIGNUP_PROCESSING_MS, move || {
            notifier.dismiss(loading);
            let result = storage::open_accounts()
                .map_err(RegisterError::from)
                .and_then(|store| register::register(&store, &form, &clock::today()));
            match result {
                Ok(_) => {
                    notifier.success_titled("Conta criada", SIGNUP_SUCCESS);
                    timer::after(SIGNUP_REDIRECT_MS, move || {
                        notifier.dismiss_all();
                        browser::navigate_to("/login");
                    });
                }
                Err(RegisterError::DuplicateEmail) => {
                    errors.update(|e| e.push(Field::Email, EMAIL_TAKEN_FIELD));
                    notifier.error_titled("E-mail já cadastrado", EMAIL_TAKEN_NOTICE);
                    busy.set(false);
                }
                Err(RegisterError::Invalid(invalid)) => {
                    errors.set(invalid.errors);
                    busy.set(false);
                }
                Err(RegisterError::Storage(e)) => {
                    log::error!("signup could not be saved: {e}");
                    notifier.error("Não foi possível salvar seu cadastro. Tente novamente.");
                    busy.set(false);
                }
            }
        });
    };

    let on_login_link = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        notifier.info("Redirecionando para Login...");
        timer::after(LINK_REDIRECT_MS, || browser::navigate_to("/login"));
    };

    let on_social = move |provider: &'static str| {
        notifier.info_titled(provider, "Cadastro com redes sociais estará disponível em breve.");
    };

    view! {
        <main class="auth-page">
            <div class="auth-card auth-card--wide">
                <a href="/" class="logo">"Flow"<span>"Pilot"</span></a>
                <h1>"Crie sua conta"</h1>
                <p class="auth-subtitle">"Comece a automatizar o trabalho da sua equipe."</p>

                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="form-row">
                        <div class=wrapper_class(errors, Field::FirstName)>
                            <label for="firstName">"Nome"</label>
                            <input
                                id="firstName"
                                type="text"
                                autocomplete="given-name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field=Field::FirstName/>
                        </div>
                        <div class=wrapper_class(errors, Field::LastName)>
                            <label for="lastName">"Sobrenome"</label>
                            <input
                                id="lastName"
                                type="text"
                                autocomplete="family-name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field=Field::LastName/>
                        </div>
                    </div>

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

                    <div class="input-wrapper">
                        <label for="phone">"Telefone"</label>
                        <input
                            id="phone"
                            type="tel"
                            autocomplete="tel"
                            placeholder="(21) 98765-4321"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(format_phone(&event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-row">
                        <div class=wrapper_class(errors, Field::Role)>
                            <label for="role">"Cargo"</label>
                            <select
                                id="role"
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione"</option>
                                {ROLE_DEPARTMENTS
                                    .iter()
                                    .map(|(name, _)| view! { <option value=*name>{*name}</option> })
                                    .collect_view()}
                            </select>
                            <FieldMessage errors=errors field=Field::Role/>
                        </div>
                        <div class="input-wrapper">
                            <label for="company">"Empresa (opcional)"</label>
                            <input
                                id="company"
                                type="text"
                                autocomplete="organization"
                                prop:value=move || company.get()
                                on:input=move |ev| company.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class=wrapper_class(errors, Field::Password)>
                        <label for="password">"Senha"</label>
                        <PasswordInput
                            value=password
                            id="password"
                            placeholder="Mínimo de 8 caracteres"
                            autocomplete="new-password"
                        />
                        <div class=move || strength.get().css_class()>
                            <div class="password-strength__bar"></div>
                            <span class="password-strength__text">{move || strength.get().label()}</span>
                        </div>
                        <FieldMessage errors=errors field=Field::Password/>
                    </div>

                    <div class=wrapper_class(errors, Field::ConfirmPassword)>
                        <label for="confirmPassword">"Confirmar senha"</label>
                        <PasswordInput
                            value=confirm_password
                            id="confirmPassword"
                            placeholder="Repita a senha"
                            autocomplete="new-password"
                        />
                        <FieldMessage errors=errors field=Field::ConfirmPassword/>
                    </div>

                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        "Li e aceito os termos de serviço e a política de privacidade."
                    </label>

                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Criando conta..." } else { "Criar conta" }}
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
                    "Já tem uma conta? "
                    <a href="/login" on:click=on_login_link>"Entrar"</a>
                </p>
            </div>
        </main>
    }
}
