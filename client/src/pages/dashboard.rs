//! Signed-in dashboard: overview, task list with points, and profile card.
//!
//! Mounted behind [`RequireSession`]; nothing below renders until the guard
//! has allowed the visit.

use leptos::prelude::*;

use crate::components::require_session::RequireSession;
use crate::state::auth::AuthState;
use crate::state::tasks::{PointsEvent, TaskBoard};
use crate::state::ui::{DashboardTab, UiState};
use crate::util::format::group_thousands;
use crate::util::notify::Notifier;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Dashboard/>
        </RequireSession>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = Notifier::expect();
    let board = RwSignal::new(TaskBoard::default());

    let active = move || ui.with(|u| u.dashboard_tab);

    let on_task = move |index: usize, done: bool| {
        let mut events = Vec::new();
        board.update(|b| events = b.set_done(index, done));
        for event in events {
            match event {
                PointsEvent::Gained(_) => notifier.success(event.message()),
                PointsEvent::Milestone(_) => notifier.success_titled("Parabéns!", event.message()),
                PointsEvent::Lost(_) => notifier.warning(event.message()),
            };
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <a href="/" class="logo">"Flow"<span>"Pilot"</span></a>
                <div class="dashboard-user">
                    <span>{move || format!("Olá, {}", auth.with(|a| a.display_name().to_owned()))}</span>
                    <span class="user-points">{move || group_thousands(board.with(|b| b.points))}</span>
                    <span class="user-points__label">"pontos"</span>
                </div>
            </header>

            <nav class="tabs" role="tablist">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                role="tab"
                                data-tab=tab.slug()
                                class:active=move || active() == tab
                                aria-selected=move || (active() == tab).to_string()
                                on:click=move |_| ui.update(|u| u.dashboard_tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <section class="tab-content" class:active=move || active() == DashboardTab::Overview>
                <div class="stats-grid">
                    <div class="stat-card">
                        <h3>"Tarefas concluídas"</h3>
                        <p>{move || board.with(|b| format!("{} de {}", b.completed(), b.tasks.len()))}</p>
                    </div>
                    <div class="stat-card">
                        <h3>"Pontuação"</h3>
                        <p>{move || group_thousands(board.with(|b| b.points))}</p>
                    </div>
                </div>
            </section>

            <section class="tab-content" class:active=move || active() == DashboardTab::Tasks>
                <ul class="task-list">
                    {move || {
                        board
                            .with(|b| b.tasks.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, task)| {
                                view! {
                                    <li class="task-item" class:task-item--done=task.done>
                                        <label class="task-checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=task.done
                                                on:change=move |ev| on_task(index, event_target_checked(&ev))
                                            />
                                            <span>{task.title}</span>
                                        </label>
                                        <span class="task-due">{task.due}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="tab-content" class:active=move || active() == DashboardTab::Profile>
                <ProfileCard auth=auth/>
            </section>
        </div>
    }
}

#[component]
fn ProfileCard(auth: RwSignal<AuthState>) -> impl IntoView {
    let field = move |read: fn(&crate::profile::UserProfile) -> String| {
        move || auth.with(|a| a.user.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class="profile-card">
            <img class="profile-avatar" alt="Avatar" src=field(|u| u.avatar.clone())/>
            <h2>{field(|u| u.name.clone())}</h2>
            <p class="profile-bio">{field(|u| u.bio.clone())}</p>
            <dl class="profile-details">
                <dt>"E-mail"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"Telefone"</dt>
                <dd>{field(|u| u.phone.clone())}</dd>
                <dt>"Cargo"</dt>
                <dd>{field(|u| u.role.clone())}</dd>
                <dt>"Departamento"</dt>
                <dd>{field(|u| u.department.clone())}</dd>
                <dt>"Membro desde"</dt>
                <dd>{field(|u| u.join_date.clone())}</dd>
            </dl>
        </div>
    }
}
