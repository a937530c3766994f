//! Notification state management
//!
//! Owns the active set of toasts and one cancellable timer per toast that
//! has a duration. Time is virtual: the owner advances it explicitly, either
//! with wall-clock deltas from the event loop or with fixed steps in tests.

use std::fmt;
use std::time::Duration;

use ratatui::style::Color;

use super::timer::{TimerHandle, TimerQueue};
use crate::theme;

/// Notification kind - determines icon and style, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Glyph drawn in front of the title
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "\u{2713}",
            NotificationKind::Error => "\u{2717}",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }

    /// Colors for this kind
    pub fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationKind::Success => &theme::notification::SUCCESS,
            NotificationKind::Error => &theme::notification::ERROR,
            NotificationKind::Warning => &theme::notification::WARNING,
            NotificationKind::Info => &theme::notification::INFO,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        NotificationKind::Info.style()
    }
}

/// Identifier assigned at enqueue time. Never reused by the same manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User-triggered action attached to a notification
pub struct NotificationAction {
    label: String,
    callback: Box<dyn FnMut()>,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, callback: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Box::new(callback),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn invoke(&mut self) {
        (self.callback)();
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Everything needed to enqueue a notification except its id
#[derive(Debug)]
pub struct NotificationSpec {
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    /// None = stays until dismissed
    pub duration: Option<Duration>,
    pub action: Option<NotificationAction>,
}

impl NotificationSpec {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration: None,
            action: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_duration_ms(self, millis: u64) -> Self {
        self.with_duration(Duration::from_millis(millis))
    }

    pub fn with_action(mut self, label: impl Into<String>, callback: impl FnMut() + 'static) -> Self {
        self.action = Some(NotificationAction::new(label, callback));
        self
    }
}

/// A single visible notification
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    title: String,
    message: Option<String>,
    duration: Option<Duration>,
    action: Option<NotificationAction>,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(NotificationAction::label)
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn style(&self) -> NotificationStyle {
        self.kind.style()
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: Option<TimerHandle>,
}

/// Owns the active set and its auto-dismiss timers.
///
/// Every operation runs to completion; there is no shared mutation, so
/// callers hold the manager by `&mut` from a single event loop.
#[derive(Debug, Default)]
pub struct NotificationManager {
    /// Oldest first
    entries: Vec<Entry>,
    timers: TimerQueue<NotificationId>,
    next_id: u64,
    now: Duration,
    revision: u64,
    dirty: bool,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and arm its timer if it has a duration
    pub fn enqueue(&mut self, spec: NotificationSpec) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let timer = spec
            .duration
            .map(|d| self.timers.schedule(self.now.saturating_add(d), id));

        #[cfg(debug_assertions)]
        log::debug!(
            "Notification {} enqueued: {:?} {:?} (duration {:?})",
            id,
            spec.kind,
            spec.title,
            spec.duration
        );

        self.entries.push(Entry {
            notification: Notification {
                id,
                kind: spec.kind,
                title: spec.title,
                message: spec.message,
                duration: spec.duration,
                action: spec.action,
            },
            timer,
        });
        self.mark_dirty();
        id
    }

    /// Remove a notification and disarm its timer.
    ///
    /// Unknown or already-dismissed ids are ignored. Returns true if an
    /// entry was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        let entry = self.entries.remove(pos);
        if let Some(handle) = entry.timer {
            self.timers.cancel(handle);
        }

        #[cfg(debug_assertions)]
        log::debug!("Notification {} dismissed", id);

        self.mark_dirty();
        true
    }

    /// Run the action callback of a notification. Does not dismiss it.
    pub fn invoke_action(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        match self.entries[pos].notification.action.as_mut() {
            Some(action) => {
                #[cfg(debug_assertions)]
                log::debug!("Notification {} action {:?} invoked", id, action.label());

                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Advance the virtual clock and fire every expired timer.
    ///
    /// Returns the ids removed by timers, in firing order.
    pub fn advance(&mut self, delta: Duration) -> Vec<NotificationId> {
        self.now = self.now.saturating_add(delta);
        self.fire_expired()
    }

    /// Advance the virtual clock to an absolute instant. Earlier instants
    /// leave the clock where it is.
    pub fn advance_to(&mut self, now: Duration) -> Vec<NotificationId> {
        self.now = self.now.max(now);
        self.fire_expired()
    }

    fn fire_expired(&mut self) -> Vec<NotificationId> {
        let mut fired = Vec::new();
        while let Some(id) = self.timers.pop_expired(self.now) {
            let Some(pos) = self.position(id) else {
                continue;
            };
            // The queue already dropped this timer's key, so the stored
            // handle is spent.
            self.entries.remove(pos);

            #[cfg(debug_assertions)]
            log::debug!("Notification {} expired at {:?}", id, self.now);

            fired.push(id);
        }
        if !fired.is_empty() {
            self.mark_dirty();
        }
        fired
    }

    /// Cancel every timer and drop every notification
    pub fn shutdown(&mut self) {
        self.timers.clear();
        if !self.entries.is_empty() {
            self.entries.clear();
            self.mark_dirty();
        }
    }

    /// Current notifications, oldest first
    pub fn list(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.entries.iter().map(|e| &e.notification)
    }

    /// The newest `max` notifications, oldest first. This is the slice a
    /// renderer capped at `max` toasts draws.
    pub fn visible(
        &self,
        max: usize,
    ) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        let skip = self.entries.len().saturating_sub(max);
        self.entries[skip..].iter().map(|e| &e.notification)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.position(id).map(|pos| &self.entries[pos].notification)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    pub fn oldest(&self) -> Option<NotificationId> {
        self.entries.first().map(|e| e.notification.id)
    }

    pub fn newest(&self) -> Option<NotificationId> {
        self.entries.last().map(|e| e.notification.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Virtual time elapsed since the manager was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time until the next timer fires, if any is armed
    pub fn time_until_next_expiry(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Bumped on every change to the active set
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|e| e.notification.id == id)
    }
}

impl Drop for NotificationManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
