//! Toast notification queue.
//!
//! DESIGN
//! ======
//! A notification is described by one [`Notification`] value instead of
//! positional arguments; builder methods cover every call shape the pages
//! need (message only, titled, custom kind, custom or zero duration).
//! [`NotificationState`] owns the visible panels and enforces the cap; the
//! timers that drive auto-dismiss live in [`crate::util::notify`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Maximum number of panels on screen at once.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Auto-dismiss delay when none is given.
pub const DEFAULT_DURATION_MS: u32 = 5000;

/// Length of the exit animation before a closed panel leaves the DOM.
pub const CLOSE_ANIMATION_MS: u32 = 300;

pub type NotificationId = u64;

/// Visual category; drives the icon and accent color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Loading,
}

impl NotificationKind {
    /// Parse a kind name. Unknown names fall back to [`NotificationKind::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "loading" => Self::Loading,
            other => {
                log::warn!("invalid notification kind `{other}`, using `info`");
                Self::Info
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Loading => "loading",
        }
    }
}

/// What to show. A `duration_ms` of 0 keeps the panel until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: Option<String>,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
}

impl Notification {
    /// Info notification with the default duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            kind: NotificationKind::Info,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).kind(NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(NotificationKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).kind(NotificationKind::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Loading indicator; never auto-dismisses.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(message)
            .kind(NotificationKind::Loading)
            .duration_ms(0)
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }
}

/// A notification on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub id: NotificationId,
    pub notification: Notification,
    /// Exit animation running; removal follows after [`CLOSE_ANIMATION_MS`].
    pub closing: bool,
}

/// Visible panels, oldest first, bounded by [`MAX_NOTIFICATIONS`].
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    panels: Vec<Panel>,
    next_id: NotificationId,
}

impl NotificationState {
    /// Append a panel. When the cap is reached the oldest panel is removed
    /// first and its id returned alongside the new one.
    pub fn push(&mut self, notification: Notification) -> (NotificationId, Option<NotificationId>) {
        let evicted = if self.panels.len() >= MAX_NOTIFICATIONS {
            Some(self.panels.remove(0).id)
        } else {
            None
        };
        self.next_id += 1;
        let id = self.next_id;
        self.panels.push(Panel {
            id,
            notification,
            closing: false,
        });
        (id, evicted)
    }

    /// Start the exit animation. Returns `false` if the panel is gone or
    /// already closing.
    pub fn begin_close(&mut self, id: NotificationId) -> bool {
        match self.panels.iter_mut().find(|p| p.id == id) {
            Some(panel) if !panel.closing => {
                panel.closing = true;
                true
            }
            _ => false,
        }
    }

    /// Drop a panel from the queue.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        self.panels.len() != before
    }

    /// Start closing every open panel; returns the ids that began closing.
    pub fn close_all(&mut self) -> Vec<NotificationId> {
        self.panels
            .iter_mut()
            .filter(|p| !p.closing)
            .map(|p| {
                p.closing = true;
                p.id
            })
            .collect()
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    #[must_use]
    pub fn is_closing(&self, id: NotificationId) -> bool {
        self.panels.iter().any(|p| p.id == id && p.closing)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// The container is only mounted while this is `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
