use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::config;
use crate::notification::{NotificationKind, NotificationSpec};

/// Upper bound on how long one poll blocks, so expiring toasts redraw promptly
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        let timeout = self
            .notifications
            .time_until_next_expiry()
            .map_or(EVENT_POLL_TIMEOUT, |d| d.min(EVENT_POLL_TIMEOUT));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => {
                self.show_sample(NotificationKind::Success);
            }
            KeyCode::Char('2') => {
                self.show_sample(NotificationKind::Error);
            }
            KeyCode::Char('3') => {
                self.show_sample(NotificationKind::Warning);
            }
            KeyCode::Char('4') => {
                self.show_sample(NotificationKind::Info);
            }
            KeyCode::Up | KeyCode::Char('k') => self.focus_older(),
            KeyCode::Down | KeyCode::Char('j') => self.focus_newer(),
            KeyCode::Char('x') => self.dismiss_focused(),
            KeyCode::Char('X') => self.dismiss_oldest_visible(),
            KeyCode::Char('a') => self.invoke_focused_action(),
            KeyCode::Char('r') => self.reload_config(),
            _ => {}
        }
    }

    fn reload_config(&mut self) {
        self.apply_config_result(config::load_config());
        self.notifications.enqueue(
            NotificationSpec::info("Configuration reloaded")
                .with_message(config::get_config_path().display().to_string())
                .with_duration(self.default_duration()),
        );
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
