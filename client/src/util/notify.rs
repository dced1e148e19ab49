//! Context handle for raising toast notifications from any component.

use leptos::prelude::*;

use crate::state::notifications::{
    CLOSE_ANIMATION_MS, Notification, NotificationId, NotificationState,
};
use crate::util::timer;

/// Copyable handle over the shared [`NotificationState`] signal.
///
/// Provided once by the app root; fetch it with [`Notifier::expect`].
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
}

impl Notifier {
    pub fn new(state: RwSignal<NotificationState>) -> Self {
        Self { state }
    }

    /// Notifier from context. Panics if the app root did not provide one.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Show a panel and schedule its auto-dismiss unless it is persistent.
    pub fn show(self, notification: Notification) -> NotificationId {
        let duration_ms = notification.duration_ms;
        let mut id = 0;
        self.state.update(|s| {
            let (new_id, evicted) = s.push(notification);
            if let Some(old) = evicted {
                log::debug!("notification {old} evicted by {new_id}");
            }
            id = new_id;
        });
        if duration_ms > 0 {
            timer::after(duration_ms, move || self.dismiss(id));
        }
        id
    }

    /// Animate a panel out, then drop it.
    pub fn dismiss(self, id: NotificationId) {
        let mut started = false;
        self.state.update(|s| started = s.begin_close(id));
        if started {
            self.remove_after_animation(id);
        }
    }

    pub fn dismiss_all(self) {
        let mut ids = Vec::new();
        self.state.update(|s| ids = s.close_all());
        for id in ids {
            self.remove_after_animation(id);
        }
    }

    pub fn success(self, message: impl Into<String>) -> NotificationId {
        self.show(Notification::success(message))
    }

    pub fn error(self, message: impl Into<String>) -> NotificationId {
        self.show(Notification::error(message))
    }

    pub fn warning(self, message: impl Into<String>) -> NotificationId {
        self.show(Notification::warning(message))
    }

    pub fn info(self, message: impl Into<String>) -> NotificationId {
        self.show(Notification::info(message))
    }

    pub fn success_titled(self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(Notification::success(message).titled(title))
    }

    pub fn error_titled(self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(Notification::error(message).titled(title))
    }

    pub fn warning_titled(self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(Notification::warning(message).titled(title))
    }

    pub fn info_titled(self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(Notification::info(message).titled(title))
    }

    /// Persistent loading panel; dismiss it explicitly when work finishes.
    pub fn loading(self, message: impl Into<String>) -> NotificationId {
        self.show(Notification::loading(message))
    }

    /// Panels to render, oldest first.
    pub fn panels(self) -> Vec<crate::state::notifications::Panel> {
        self.state.with(|s| s.panels().to_vec())
    }

    pub fn is_closing(self, id: NotificationId) -> bool {
        self.state.with(|s| s.is_closing(id))
    }

    pub fn is_empty(self) -> bool {
        self.state.with(NotificationState::is_empty)
    }

    fn remove_after_animation(self, id: NotificationId) {
        timer::after(CLOSE_ANIMATION_MS, move || {
            self.state.update(|s| {
                s.remove(id);
            });
        });
    }
}
