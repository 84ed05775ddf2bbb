//! Single channel for user-facing messages.
//!
//! Systems never block on an alert: they emit a [`UserNotice`], which is
//! collected into [`NoticeLog`]. The overlay shows pending notices one at a
//! time and the log makes them observable in headless tests.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Event emitted by any system that needs to tell the user something.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub text: String,
}

impl UserNotice {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Resource, Debug)]
pub struct NoticeLog {
    /// Notices not yet dismissed, oldest first.
    pub pending: VecDeque<String>,
    /// Total number of notices ever received.
    pub total: u64,
    /// Pending notices beyond this count drop the oldest.
    pub max_pending: usize,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            total: 0,
            max_pending: 8,
        }
    }
}

impl NoticeLog {
    pub fn push(&mut self, text: String) {
        self.total += 1;
        self.pending.push_back(text);
        while self.pending.len() > self.max_pending {
            self.pending.pop_front();
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }
}

pub fn collect_notices(mut events: EventReader<UserNotice>, mut log: ResMut<NoticeLog>) {
    for notice in events.read() {
        info!("Notice: {}", notice.text);
        log.push(notice.text.clone());
    }
}

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UserNotice>()
            .init_resource::<NoticeLog>()
            .add_systems(PostUpdate, collect_notices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_fifo() {
        let mut log = NoticeLog::default();
        log.push("first".into());
        log.push("second".into());
        assert_eq!(log.current(), Some("first"));
        log.dismiss();
        assert_eq!(log.current(), Some("second"));
        log.dismiss();
        assert_eq!(log.current(), None);
        assert_eq!(log.total, 2);
    }

    #[test]
    fn test_log_drops_oldest_beyond_cap() {
        let mut log = NoticeLog {
            max_pending: 2,
            ..Default::default()
        };
        for i in 0..4 {
            log.push(format!("n{i}"));
        }
        assert_eq!(log.pending.len(), 2);
        assert_eq!(log.current(), Some("n2"));
    }
}
