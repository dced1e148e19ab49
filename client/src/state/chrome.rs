//! Navigation chrome state: mobile drawer, auto-hiding header, swipe
//! gestures, FAQ accordion and in-page anchor scrolling.
//!
//! DESIGN
//! ======
//! Everything here is plain data plus pure decisions. `SiteHeader` feeds
//! window events in and applies the results (body scroll lock, haptics,
//! `scrollTo`) so the rules stay testable off the browser.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

/// Touches must start this close to the left edge to open the drawer.
pub const SWIPE_EDGE_PX: f64 = 40.0;
/// Horizontal travel that always counts as a swipe.
pub const SWIPE_DISTANCE_PX: f64 = 60.0;
/// Flick speed that counts as a swipe for shorter travel.
pub const SWIPE_VELOCITY_PX_PER_MS: f64 = 0.4;
/// Minimum horizontal travel for a flick.
pub const SWIPE_MIN_FLICK_PX: f64 = 20.0;
/// Fixed header height subtracted from anchor targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// `#hero` links do nothing when the page is already this close to the top.
pub const HERO_SNAP_PX: f64 = 100.0;
/// Length of the haptic pulse when the drawer opens.
pub const HAPTIC_PULSE_MS: u32 = 10;

/// Drawer and header visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChromeState {
    pub drawer_open: bool,
    pub header_hidden: bool,
    pub last_scroll_top: f64,
}

impl ChromeState {
    /// Returns `true` when the drawer was closed before.
    pub fn open_drawer(&mut self) -> bool {
        let changed = !self.drawer_open;
        self.drawer_open = true;
        self.header_hidden = false;
        changed
    }

    /// Returns `true` when the drawer was open before.
    pub fn close_drawer(&mut self) -> bool {
        let changed = self.drawer_open;
        self.drawer_open = false;
        changed
    }

    /// Reset for a page change: the drawer closes, the header shows again and
    /// scroll tracking restarts from the top.
    pub fn leave_page(&mut self) {
        *self = Self::default();
    }

    /// Update header visibility for a new scroll offset.
    ///
    /// Scrolling down hides the header unless the drawer is open; scrolling
    /// up shows it. Negative offsets (overscroll bounce) clamp to zero.
    pub fn on_scroll(&mut self, scroll_top: f64) {
        let top = scroll_top.max(0.0);
        if top > self.last_scroll_top {
            if !self.drawer_open {
                self.header_hidden = true;
            }
        } else if top < self.last_scroll_top {
            self.header_hidden = false;
        }
        self.last_scroll_top = top;
    }
}

/// A touch sample: client coordinates plus event timestamp in ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    pub at_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Open,
    Close,
}

/// Classify a finished touch from `start` to `end`.
///
/// The gesture must be mostly horizontal and either travel
/// [`SWIPE_DISTANCE_PX`] or flick at [`SWIPE_VELOCITY_PX_PER_MS`] over at
/// least [`SWIPE_MIN_FLICK_PX`]. A right swipe opens the drawer only from the
/// left edge; a left swipe closes it only while open.
#[must_use]
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, drawer_open: bool) -> Option<Swipe> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() <= dy.abs() {
        return None;
    }
    let elapsed = (end.at_ms - start.at_ms).max(1.0);
    let far = dx.abs() >= SWIPE_DISTANCE_PX;
    let fast = dx.abs() >= SWIPE_MIN_FLICK_PX && dx.abs() / elapsed >= SWIPE_VELOCITY_PX_PER_MS;
    if !far && !fast {
        return None;
    }
    if dx > 0.0 && !drawer_open && start.x <= SWIPE_EDGE_PX {
        Some(Swipe::Open)
    } else if dx < 0.0 && drawer_open {
        Some(Swipe::Close)
    } else {
        None
    }
}

/// Which FAQ entry is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Open `index`, closing any other entry; clicking the open entry closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// What clicking an in-page link should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page anchor, or the bare `#`.
    Ignore,
    /// Already where the link points.
    Stay,
    ScrollTo(f64),
}

/// Decide how to follow `href`.
///
/// `target_top` is the `offsetTop` of the element the fragment names, or
/// `None` when no such element exists.
#[must_use]
pub fn anchor_action(href: &str, scroll_top: f64, target_top: Option<f64>) -> AnchorAction {
    let Some(id) = href.strip_prefix('#') else {
        return AnchorAction::Ignore;
    };
    if id.is_empty() {
        return AnchorAction::Ignore;
    }
    if id == "hero" {
        return if scroll_top < HERO_SNAP_PX {
            AnchorAction::Stay
        } else {
            AnchorAction::ScrollTo(0.0)
        };
    }
    match target_top {
        Some(top) => AnchorAction::ScrollTo((top - HEADER_OFFSET_PX).max(0.0)),
        None => AnchorAction::Ignore,
    }
}
