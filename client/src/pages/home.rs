//! Marketing landing page.

use leptos::prelude::*;

use crate::components::faq::{Faq, FaqEntry};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::{HOME_LINKS, SiteHeader, follow_anchor};
use crate::state::chrome::ChromeState;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Automação inteligente",
        text: "Transforme tarefas repetitivas em fluxos que rodam sozinhos.",
    },
    Feature {
        icon: "📊",
        title: "Relatórios em tempo real",
        text: "Acompanhe o desempenho da equipe com painéis sempre atualizados.",
    },
    Feature {
        icon: "🔗",
        title: "Integrações",
        text: "Conecte as ferramentas que sua empresa já usa em poucos cliques.",
    },
    Feature {
        icon: "🏆",
        title: "Gamificação",
        text: "Pontos e metas que mantêm todos engajados.",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Crie sua conta", "Cadastre-se gratuitamente em menos de um minuto."),
    ("Monte seus fluxos", "Use modelos prontos ou desenhe processos do zero."),
    ("Acompanhe resultados", "Veja tarefas, pontos e metas no seu painel."),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Reduzimos pela metade o tempo gasto com aprovações.",
        "Mariana Costa",
        "Gerente de Operações",
    ),
    (
        "A equipe finalmente enxerga o que está pendente e o que já foi feito.",
        "Rafael Souza",
        "Coordenador de TI",
    ),
];

pub const HOME_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Preciso de cartão de crédito para testar?",
        answer: "Não. O período de teste é gratuito e não exige dados de pagamento.",
    },
    FaqEntry {
        question: "Posso mudar de plano depois?",
        answer: "Sim, é possível trocar de plano a qualquer momento pelo painel.",
    },
    FaqEntry {
        question: "Meus dados ficam seguros?",
        answer: "Nesta demonstração os dados ficam apenas no seu navegador.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let chrome = expect_context::<RwSignal<ChromeState>>();
    let on_anchor = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if follow_anchor(chrome, href) {
            ev.prevent_default();
        }
    };

    view! {
        <SiteHeader links=HOME_LINKS/>
        <main>
            <section id="hero" class="hero">
                <div class="container hero-content">
                    <h1>"Automatize o trabalho da sua equipe com o FlowPilot"</h1>
                    <p>"Organize tarefas, acompanhe metas e elimine processos manuais em um só lugar."</p>
                    <div class="hero-actions">
                        <a href="/register" class="btn btn-primary">"Comece grátis"</a>
                        <a href="#features" class="btn btn-outline" on:click=move |ev| on_anchor(ev, "#features")>
                            "Saiba mais"
                        </a>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    <h2 class="section-title">"Recursos"</h2>
                    <div class="features-grid">
                        {FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <div class="feature-card">
                                        <span class="feature-icon">{f.icon}</span>
                                        <h3>{f.title}</h3>
                                        <p>{f.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="container">
                    <h2 class="section-title">"Como funciona"</h2>
                    <ol class="steps">
                        {STEPS
                            .iter()
                            .map(|(title, text)| view! { <li><h3>{*title}</h3><p>{*text}</p></li> })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <h2 class="section-title">"Depoimentos"</h2>
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, name, role)| {
                            view! {
                                <blockquote class="testimonial">
                                    <p>{*quote}</p>
                                    <footer>{*name}", "{*role}</footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="faq" class="faq-section">
                <div class="container">
                    <h2 class="section-title">"Perguntas frequentes"</h2>
                    <Faq entries=HOME_FAQ/>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>"Pronto para começar?"</h2>
                    <a href="/pricing" class="btn btn-primary">"Ver planos"</a>
                    <a href="#hero" class="back-to-top" on:click=move |ev| on_anchor(ev, "#hero")>
                        "Voltar ao topo"
                    </a>
                </div>
            </section>
        </main>
        <SiteFooter/>
    }
}
