//! Help line module
//!
//! The one-line key reference at the bottom of the dashboard.

pub mod help_line_render;
