//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Light - the dashboard forces a single light theme, there is no
//! runtime switching.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(15, 23, 42);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

    // Background colors
    pub const BG: Color = Color::Rgb(255, 255, 255);
    pub const BG_SURFACE: Color = Color::Rgb(248, 250, 252);
    pub const BORDER: Color = Color::Rgb(226, 232, 240);

    // Accent colors
    pub const BLUE: Color = Color::Rgb(37, 99, 235);
    pub const GREEN: Color = Color::Rgb(22, 163, 74);
    pub const ORANGE: Color = Color::Rgb(234, 88, 12);
    pub const YELLOW: Color = Color::Rgb(202, 138, 4);
    pub const PURPLE: Color = Color::Rgb(147, 51, 234);
    pub const INDIGO: Color = Color::Rgb(79, 70, 229);
    pub const RED: Color = Color::Rgb(220, 38, 38);
}

/// Header bar styles
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const ENDPOINT: Color = palette::TEXT_MUTED;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
}

/// Stats card styles
pub mod stats {
    use super::*;

    pub const BORDER: Color = palette::BORDER;
    pub const BACKGROUND: Color = palette::BG;
    pub const TITLE: Color = palette::TEXT;
    pub const VALUE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const TREND_UP: Color = palette::GREEN;
    pub const TREND_DOWN: Color = palette::RED;

    // Per-card accent (icon) colors, in card order
    pub const TOTAL_CARS: Color = palette::BLUE;
    pub const REVENUE: Color = palette::GREEN;
    pub const OFFERS: Color = palette::ORANGE;
    pub const FEATURED: Color = palette::YELLOW;
    pub const VARIANTS: Color = palette::PURPLE;
    pub const BRANDS: Color = palette::INDIGO;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: Color::Rgb(22, 101, 52),
        bg: Color::Rgb(240, 253, 244),
        border: Color::Rgb(187, 247, 208),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(153, 27, 27),
        bg: Color::Rgb(254, 242, 242),
        border: Color::Rgb(254, 202, 202),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(133, 77, 14),
        bg: Color::Rgb(254, 252, 232),
        border: Color::Rgb(254, 240, 138),
    };

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(30, 64, 175),
        bg: Color::Rgb(239, 246, 255),
        border: Color::Rgb(191, 219, 254),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::BLUE;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::BORDER;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
}
