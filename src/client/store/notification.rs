use std::collections::VecDeque;

use crate::client::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    /// daisyUI alert class of the level
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "alert alert-info",
            NotificationLevel::Success => "alert alert-success",
            NotificationLevel::Error => "alert alert-error",
        }
    }
}

/// A transient, user-facing message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    /// Notification for a failed operation, None when the error should stay silent
    pub fn from_error(err: &Error) -> Option<(NotificationLevel, String)> {
        err.user_message()
            .map(|message| (NotificationLevel::Error, message))
    }
}

/// Bounded queue of visible notifications, oldest dropped first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.queue.push_back(Notification {
            id,
            level,
            message: message.into(),
        });

        while self.queue.len() > Self::MAX_VISIBLE {
            self.queue.pop_front();
        }

        id
    }

    /// Push the notification matching an error, if it has one
    pub fn push_error(&mut self, err: &Error) -> Option<u64> {
        Notification::from_error(err).map(|(level, message)| self.push(level, message))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.retain(|notification| notification.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
