//! Recent activity feed
//!
//! A short, capped list of timestamped lines. Notification actions hold a
//! clone of the log so they can record what they did without borrowing the
//! app.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::Local;

const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Rc<RefCell<VecDeque<String>>>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Record an event, dropping the oldest one when full
    pub fn push(&self, text: &str) {
        let line = format!("{}  {}", Local::now().format("%H:%M:%S"), text);
        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(line);
    }

    /// Newest first
    pub fn recent(&self) -> Vec<String> {
        self.entries.borrow().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_recent_newest_first() {
        let log = ActivityLog::new();
        log.push("first");
        log.push("second");

        let recent = log.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("second"));
        assert!(recent[1].ends_with("first"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let log = ActivityLog::with_capacity(2);
        log.push("a");
        log.push("b");
        log.push("c");

        let recent = log.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("c"));
        assert!(recent[1].ends_with("b"));
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ActivityLog::new();
        let handle = log.clone();
        handle.push("from clone");

        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
    }
}
