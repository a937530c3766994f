//! Stats module for the dashboard summary cards
//!
//! Turns a precomputed `DashboardStats` record into display-ready cards.
//! No aggregation happens here; the numbers arrive already counted.

mod format;
pub mod stats_render;
mod stats_state;
mod types;

// Re-export public types
pub use format::{format_count, format_sar_millions};
pub use stats_state::StatsState;
pub use types::{DashboardStats, StatCard, Trend};
