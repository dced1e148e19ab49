//! Render gate for pages that need a signed-in user.
//!
//! DESIGN
//! ======
//! Storage is only readable after hydration, so the gate renders a neutral
//! placeholder first and decides in an effect. A denied visitor never sees
//! the protected children: the location is replaced before they mount.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::guard::{self, GuardDecision, Page};
use crate::state::auth::AuthState;
use crate::storage;
use crate::util::browser;

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = Page::from_path(&use_location().pathname.get_untracked());
    let allowed = RwSignal::new(!page.is_protected());

    Effect::new(move || {
        if allowed.get_untracked() {
            return;
        }
        let store = match storage::open_accounts() {
            Ok(store) => store,
            Err(e) => {
                log::error!("[auth] storage unavailable, allowing {page:?}: {e}");
                allowed.set(true);
                return;
            }
        };
        match guard::decide(&store, page) {
            GuardDecision::Allow => {
                let user = store.session_profile().unwrap_or_else(|e| {
                    log::warn!("[auth] failed to load session profile: {e}");
                    None
                });
                auth.set(AuthState { user });
                allowed.set(true);
            }
            GuardDecision::Redirect { to, .. } => {
                auth.set(AuthState::default());
                browser::replace_location(to.path());
            }
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="session-gate" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
