use super::*;

fn touch(x: f64, y: f64, at_ms: f64) -> TouchPoint {
    TouchPoint { x, y, at_ms }
}

// =============================================================
// Drawer + header
// =============================================================

#[test]
fn drawer_open_close_report_changes() {
    let mut state = ChromeState::default();
    assert!(state.open_drawer());
    assert!(!state.open_drawer());
    assert!(state.close_drawer());
    assert!(!state.close_drawer());
}

#[test]
fn leaving_page_closes_drawer_and_resets_header() {
    let mut chrome = ChromeState::default();
    chrome.on_scroll(300.0);
    chrome.open_drawer();
    chrome.leave_page();
    assert!(!chrome.drawer_open);
    assert!(!chrome.header_hidden);
    assert_eq!(chrome, ChromeState::default());
}

#[test]
fn scrolling_down_hides_header_and_up_shows_it() {
    let mut state = ChromeState::default();
    state.on_scroll(200.0);
    assert!(state.header_hidden);
    state.on_scroll(150.0);
    assert!(!state.header_hidden);
    assert_eq!(state.last_scroll_top, 150.0);
}

#[test]
fn header_stays_visible_while_drawer_open() {
    let mut state = ChromeState::default();
    state.open_drawer();
    state.on_scroll(300.0);
    assert!(!state.header_hidden);
}

#[test]
fn negative_scroll_clamps_to_zero() {
    let mut state = ChromeState::default();
    state.on_scroll(-40.0);
    assert_eq!(state.last_scroll_top, 0.0);
    assert!(!state.header_hidden);
}

// =============================================================
// Swipe
// =============================================================

#[test]
fn long_right_swipe_from_edge_opens() {
    let swipe = classify_swipe(touch(10.0, 100.0, 0.0), touch(90.0, 110.0, 500.0), false);
    assert_eq!(swipe, Some(Swipe::Open));
}

#[test]
fn right_swipe_away_from_edge_is_ignored() {
    let swipe = classify_swipe(touch(120.0, 100.0, 0.0), touch(220.0, 100.0, 100.0), false);
    assert_eq!(swipe, None);
}

#[test]
fn fast_short_flick_counts() {
    // 30 px in 50 ms = 0.6 px/ms
    let swipe = classify_swipe(touch(300.0, 0.0, 0.0), touch(270.0, 5.0, 50.0), true);
    assert_eq!(swipe, Some(Swipe::Close));
}

#[test]
fn slow_short_move_is_ignored() {
    let swipe = classify_swipe(touch(300.0, 0.0, 0.0), touch(270.0, 0.0, 500.0), true);
    assert_eq!(swipe, None);
}

#[test]
fn tiny_fast_move_is_ignored() {
    let swipe = classify_swipe(touch(300.0, 0.0, 0.0), touch(290.0, 0.0, 5.0), true);
    assert_eq!(swipe, None);
}

#[test]
fn vertical_move_is_ignored() {
    let swipe = classify_swipe(touch(10.0, 0.0, 0.0), touch(80.0, 200.0, 100.0), false);
    assert_eq!(swipe, None);
}

#[test]
fn left_swipe_while_closed_is_ignored() {
    let swipe = classify_swipe(touch(300.0, 0.0, 0.0), touch(100.0, 0.0, 100.0), false);
    assert_eq!(swipe, None);
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn accordion_keeps_at_most_one_open() {
    let mut faq = Accordion::default();
    faq.toggle(1);
    assert!(faq.is_open(1));
    faq.toggle(2);
    assert!(!faq.is_open(1));
    assert!(faq.is_open(2));
    faq.toggle(2);
    assert_eq!(faq, Accordion::default());
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn bare_hash_and_external_links_are_ignored() {
    assert_eq!(anchor_action("#", 0.0, Some(10.0)), AnchorAction::Ignore);
    assert_eq!(anchor_action("/pricing", 0.0, None), AnchorAction::Ignore);
}

#[test]
fn hero_near_top_stays() {
    assert_eq!(anchor_action("#hero", 60.0, Some(0.0)), AnchorAction::Stay);
    assert_eq!(anchor_action("#hero", 600.0, Some(0.0)), AnchorAction::ScrollTo(0.0));
}

#[test]
fn hero_at_snap_distance_scrolls() {
    assert_eq!(anchor_action("#hero", 99.0, None), AnchorAction::Stay);
    assert_eq!(anchor_action("#hero", 100.0, None), AnchorAction::ScrollTo(0.0));
}

#[test]
fn other_anchors_offset_for_header() {
    assert_eq!(anchor_action("#features", 0.0, Some(900.0)), AnchorAction::ScrollTo(820.0));
    assert_eq!(anchor_action("#missing", 0.0, None), AnchorAction::Ignore);
}
