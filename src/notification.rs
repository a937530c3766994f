//! Notification module for dealerdash
//!
//! Transient toasts with optional auto-dismiss timers and optional user
//! actions. The manager is an ordinary owned value: whoever holds it drives
//! its clock and decides when to render.

mod notification_render;
mod notification_state;
pub mod timer;

pub use notification_render::render_notifications;
pub use notification_state::{
    Notification, NotificationAction, NotificationId, NotificationKind, NotificationManager,
    NotificationSpec, NotificationStyle,
};
