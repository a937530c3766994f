//! Type definitions for dashboard statistics

use std::fmt;

use ratatui::style::Color;
use serde::Deserialize;

/// Catalog totals as delivered by the backend.
///
/// Keys are camelCase on the wire. Missing keys read as zero.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_cars: u64,
    pub total_brands: u64,
    pub total_offers: u64,
    pub total_variants: u64,
    pub featured_cars: u64,
    pub published_cars: u64,
    pub draft_cars: u64,
    pub active_offers: u64,
    /// SAR
    pub total_revenue: f64,
    /// SAR
    pub monthly_revenue: f64,
}

/// Trend badge shown in a card's corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    pub value: &'static str,
    pub positive: bool,
}

impl Trend {
    pub const fn up(value: &'static str) -> Self {
        Self {
            value,
            positive: true,
        }
    }

    /// Arrow glyph for the badge
    pub fn arrow(&self) -> &'static str {
        if self.positive { "\u{2197}" } else { "\u{2198}" }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrow(), self.value)
    }
}

/// One formatted summary card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub description: String,
    pub trend: Trend,
    pub accent: Color,
}
