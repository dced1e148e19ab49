//! Dashboard presentation state.
//!
//! DESIGN
//! ======
//! Keeps tab selection out of the task and profile models so the dashboard
//! layout can change without touching them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard sections. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Tasks,
    Profile,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Tasks, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Visão geral",
            Self::Tasks => "Tarefas",
            Self::Profile => "Perfil",
        }
    }

    /// Value for the tab's `data-tab` attribute and panel id prefix.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Tasks => "tasks",
            Self::Profile => "profile",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dashboard_tab: DashboardTab,
}
