use super::*;

// =============================================================
// Notification builder
// =============================================================

#[test]
fn new_defaults_to_info_with_default_duration() {
    let n = Notification::new("Olá");
    assert_eq!(n.kind, NotificationKind::Info);
    assert_eq!(n.duration_ms, DEFAULT_DURATION_MS);
    assert!(n.title.is_none());
}

#[test]
fn titled_kind_and_duration_compose() {
    let n = Notification::new("Detalhes")
        .titled("Título")
        .kind(NotificationKind::Error)
        .duration_ms(1500);
    assert_eq!(n.title.as_deref(), Some("Título"));
    assert_eq!(n.message, "Detalhes");
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.duration_ms, 1500);
}

#[test]
fn loading_is_persistent() {
    let n = Notification::loading("Carregando...");
    assert_eq!(n.kind, NotificationKind::Loading);
    assert!(n.is_persistent());
}

#[test]
fn kind_parse_falls_back_to_info() {
    assert_eq!(NotificationKind::parse("error"), NotificationKind::Error);
    assert_eq!(NotificationKind::parse("loading"), NotificationKind::Loading);
    assert_eq!(NotificationKind::parse("danger"), NotificationKind::Info);
}

#[test]
fn kind_as_str_matches_parse() {
    for kind in [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
        NotificationKind::Loading,
    ] {
        assert_eq!(NotificationKind::parse(kind.as_str()), kind);
    }
}

// =============================================================
// Queue
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let (a, _) = state.push(Notification::new("a"));
    let (b, _) = state.push(Notification::new("b"));
    assert!(b > a);
    assert_eq!(state.len(), 2);
}

#[test]
fn never_more_than_max_panels() {
    let mut state = NotificationState::default();
    for i in 0..20 {
        state.push(Notification::new(format!("n{i}")));
        assert!(state.len() <= MAX_NOTIFICATIONS);
    }
    assert_eq!(state.len(), MAX_NOTIFICATIONS);
}

#[test]
fn sixth_push_evicts_oldest_first() {
    let mut state = NotificationState::default();
    let first = state.push(Notification::new("first")).0;
    for i in 0..4 {
        state.push(Notification::new(format!("n{i}")));
    }
    let (sixth, evicted) = state.push(Notification::new("sixth"));
    assert_eq!(evicted, Some(first));
    assert!(state.panels().iter().all(|p| p.id != first));
    assert_eq!(state.panels().last().map(|p| p.id), Some(sixth));
    assert_eq!(state.panels()[0].notification.message, "n0");
}

#[test]
fn begin_close_marks_once() {
    let mut state = NotificationState::default();
    let (id, _) = state.push(Notification::new("x"));
    assert!(state.begin_close(id));
    assert!(state.is_closing(id));
    assert!(!state.begin_close(id));
    assert!(!state.begin_close(id + 100));
}

#[test]
fn remove_empties_queue() {
    let mut state = NotificationState::default();
    let (id, _) = state.push(Notification::new("x"));
    assert!(state.remove(id));
    assert!(!state.remove(id));
    assert!(state.is_empty());
}

#[test]
fn close_all_skips_panels_already_closing() {
    let mut state = NotificationState::default();
    let (a, _) = state.push(Notification::new("a"));
    let (b, _) = state.push(Notification::new("b"));
    state.begin_close(a);
    assert_eq!(state.close_all(), vec![b]);
    assert!(state.is_closing(a) && state.is_closing(b));
}
