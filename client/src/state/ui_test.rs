use super::*;

#[test]
fn ui_state_default_tab_is_overview() {
    assert_eq!(UiState::default().dashboard_tab, DashboardTab::Overview);
}

#[test]
fn tab_slugs_are_unique() {
    let mut slugs: Vec<_> = DashboardTab::ALL.iter().map(|t| t.slug()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), DashboardTab::ALL.len());
}

#[test]
fn tab_labels_are_portuguese() {
    assert_eq!(DashboardTab::Tasks.label(), "Tarefas");
}
