use super::*;
use crate::error::ValidationError;

/// Avisos visibles a la vez; los más antiguos se descartan.
const MAX_NOTIFICATIONS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl QuizApp {
    pub fn notify(&mut self, kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) {
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id: self.next_notification_id,
            title: title.into(),
            description: description.into(),
            kind,
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let overflow = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..overflow);
        }
    }

    pub fn notify_success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NotificationKind::Success, title, description);
    }

    pub fn notify_invalid(&mut self, err: &ValidationError) {
        log::debug!("Validación rechazada: {err}");
        self.notify(NotificationKind::Error, err.title(), err.description());
    }

    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }
}
