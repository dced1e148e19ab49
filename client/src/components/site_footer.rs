//! Site footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <a href="/" class="logo">"Flow"<span>"Pilot"</span></a>
                    <p>"Automação de fluxos de trabalho para equipes que querem focar no que importa."</p>
                </div>
                <ul class="footer-links">
                    <li><a href="/pricing">"Preços"</a></li>
                    <li><a href="/register">"Criar conta"</a></li>
                    <li><a href="/login">"Entrar"</a></li>
                </ul>
            </div>
            <p class="footer-copy">"© 2025 FlowPilot. Todos os direitos reservados."</p>
        </footer>
    }
}
