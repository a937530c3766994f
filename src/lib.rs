//! dealerdash library - car-dealership admin dashboard
//!
//! This library exposes the notification manager and the dashboard pieces
//! for testing and embedding.

pub mod activity;
pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod notification;
pub mod stats;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::{NotificationId, NotificationKind, NotificationManager, NotificationSpec};
