use std::time::{Duration, Instant};

use crate::activity::ActivityLog;
use crate::config::{Config, ConfigResult};
use crate::notification::{NotificationId, NotificationKind, NotificationManager, NotificationSpec};
use crate::stats::{DashboardStats, StatsState};

pub struct App {
    pub notifications: NotificationManager,
    pub stats: StatsState,
    pub config: Config,
    pub activity: ActivityLog,
    pub should_quit: bool,
    /// Toast the close and action keys target; `None` means the newest visible
    focused: Option<NotificationId>,
    /// Sticky error raised by the last failed API validation
    config_error_toast: Option<NotificationId>,
    dirty: bool,
    last_tick: Option<Instant>,
}

impl App {
    pub fn new(stats: DashboardStats, config: Config) -> Self {
        Self {
            notifications: NotificationManager::new(),
            stats: StatsState::new(stats),
            config,
            activity: ActivityLog::new(),
            should_quit: false,
            focused: None,
            config_error_toast: None,
            dirty: true,
            last_tick: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.notifications.is_dirty()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.notifications.clear_dirty();
    }

    /// Feed wall-clock time into the notification timers
    pub fn tick(&mut self, now: Instant) {
        let delta = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.advance_clock(delta);
    }

    pub fn advance_clock(&mut self, delta: Duration) {
        let expired = self.notifications.advance(delta);
        if expired.is_empty() {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("{} notification(s) expired", expired.len());

        if self.focused.is_some_and(|id| expired.contains(&id)) {
            self.focused = None;
        }
    }

    /// Install a freshly loaded configuration and surface its problems.
    ///
    /// Load warnings become a timed warning toast; backend validation
    /// failures become an error toast that stays until dismissed.
    pub fn apply_config_result(&mut self, result: ConfigResult) {
        self.config = result.config;

        if let Some(warning) = result.warning {
            self.notifications.enqueue(
                NotificationSpec::warning("Configuration problem")
                    .with_message(warning)
                    .with_duration(self.long_duration()),
            );
        }

        // A reload replaces the previous verdict instead of stacking another
        if let Some(id) = self.config_error_toast.take() {
            self.notifications.dismiss(id);
        }

        if let Err(e) = self.config.api.validate() {
            #[cfg(debug_assertions)]
            log::warn!("{}", e);

            let id = self.notifications.enqueue(
                NotificationSpec::error("API configuration incomplete").with_message(e.to_string()),
            );
            self.config_error_toast = Some(id);
        }
        self.mark_dirty();
    }

    /// Toast the close and action keys act on.
    ///
    /// Only drawn toasts can hold focus; when the stored focus is gone or
    /// scrolled out by the `max_visible` cap, the newest toast takes it.
    pub fn focused_notification(&self) -> Option<NotificationId> {
        let max = self.config.notifications.max_visible;
        self.focused
            .filter(|id| self.notifications.visible(max).any(|n| n.id() == *id))
            .or_else(|| self.notifications.visible(max).next_back().map(|n| n.id()))
    }

    /// Move focus one toast up the stack (towards older ones)
    pub fn focus_older(&mut self) {
        self.move_focus(|ids, pos| pos.checked_sub(1).and_then(|p| ids.get(p).copied()));
    }

    /// Move focus one toast down the stack (towards newer ones)
    pub fn focus_newer(&mut self) {
        self.move_focus(|ids, pos| ids.get(pos + 1).copied());
    }

    fn move_focus(&mut self, step: impl Fn(&[NotificationId], usize) -> Option<NotificationId>) {
        let Some(current) = self.focused_notification() else {
            return;
        };
        let ids: Vec<NotificationId> = self
            .notifications
            .visible(self.config.notifications.max_visible)
            .map(|n| n.id())
            .collect();
        let Some(pos) = ids.iter().position(|id| *id == current) else {
            return;
        };

        if let Some(next) = step(&ids, pos) {
            self.focused = Some(next);
            self.mark_dirty();
        }
    }

    pub fn dismiss_focused(&mut self) {
        if let Some(id) = self.focused_notification() {
            self.dismiss(id);
        }
    }

    /// Dismiss the oldest toast on screen, never one hidden by the cap
    pub fn dismiss_oldest_visible(&mut self) {
        let oldest = self
            .notifications
            .visible(self.config.notifications.max_visible)
            .next()
            .map(|n| n.id());
        if let Some(id) = oldest {
            self.dismiss(id);
        }
    }

    fn dismiss(&mut self, id: NotificationId) {
        if self.notifications.dismiss(id) && self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Run the focused toast's action; the toast stays up
    pub fn invoke_focused_action(&mut self) {
        if let Some(id) = self.focused_notification()
            && self.notifications.invoke_action(id)
        {
            self.mark_dirty();
        }
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.config.notifications.default_duration_ms)
    }

    fn long_duration(&self) -> Duration {
        self.default_duration() * 3
    }

    /// Enqueue one of the canned notifications bound to the number keys
    pub fn show_sample(&mut self, kind: NotificationKind) -> NotificationId {
        let log = self.activity.clone();
        let spec = match kind {
            NotificationKind::Success => NotificationSpec::success("Car saved")
                .with_message("Toyota Camry 2024 was updated")
                .with_duration(self.default_duration()),
            NotificationKind::Error => NotificationSpec::error("Upload failed")
                .with_message("Image exceeds the 5 MB limit")
                .with_action("Retry", move || log.push("Retried image upload")),
            NotificationKind::Warning => NotificationSpec::warning("Unpublished changes")
                .with_message(format!("{} cars still in draft", self.stats.stats().draft_cars))
                .with_duration(self.long_duration())
                .with_action("Publish", move || log.push("Published draft cars")),
            NotificationKind::Info => NotificationSpec::info("Catalog sync scheduled")
                .with_message(self.config.api.graphql_url())
                .with_duration(self.default_duration()),
        };
        self.notifications.enqueue(spec)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
