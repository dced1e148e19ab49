//! Plans page with the monthly/annual billing toggle.

use leptos::prelude::*;

use crate::components::faq::{Faq, FaqEntry};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::{SITE_LINKS, SiteHeader};
use crate::state::pricing::{BillingPeriod, PLANS, Plan};

const PRICING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Como funciona a cobrança anual?",
        answer: "Você paga o valor do ano de uma vez com desconto sobre o plano mensal.",
    },
    FaqEntry {
        question: "Posso cancelar quando quiser?",
        answer: "Sim. O plano mensal pode ser cancelado a qualquer momento sem multa.",
    },
    FaqEntry {
        question: "Existe desconto para ONGs?",
        answer: "Sim, entre em contato com nossa equipe comercial.",
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::default());

    view! {
        <SiteHeader links=SITE_LINKS/>
        <main class="pricing-page">
            <section class="pricing-hero container">
                <h1>"Planos para equipes de todos os tamanhos"</h1>
                <div class="billing-toggle">
                    <span id="monthly-option" class:active=move || !period.get().is_annual()>"Mensal"</span>
                    <label class="switch">
                        <input
                            id="billing-toggle"
                            type="checkbox"
                            prop:checked=move || period.get().is_annual()
                            on:change=move |_| period.update(|p| *p = p.toggled())
                        />
                        <span class="slider"></span>
                    </label>
                    <span id="annual-option" class:active=move || period.get().is_annual()>"Anual"</span>
                </div>
            </section>
            <section class="pricing-grid container">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=plan period=period/> }).collect_view()}
            </section>
            <section class="faq-section container">
                <h2 class="section-title">"Dúvidas sobre os planos"</h2>
                <Faq entries=PRICING_FAQ/>
            </section>
        </main>
        <SiteFooter/>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, period: RwSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="pricing-card" class:featured=plan.highlighted>
            <h3>{plan.name}</h3>
            <p class="pricing-tagline">{plan.tagline}</p>
            <div class="price">
                <span class="currency">"R$"</span>
                <span class="price-value">{move || plan.price(period.get())}</span>
            </div>
            <p class="pricing-period">{move || period.get().period_label()}</p>
            <Show when=move || period.get().is_annual()>
                <p class="annual-saving">{plan.savings_label()}</p>
            </Show>
            <p class="total-price" id=format!("{}-total", plan.id)>
                {move || plan.total_label(period.get())}
            </p>
            <ul class="pricing-features">
                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <a href="/register" class="btn btn-block" class:btn-primary=plan.highlighted class:btn-outline={!plan.highlighted}>
                "Começar agora"
            </a>
        </div>
    }
}
