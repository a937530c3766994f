//! State management for dashboard statistics
//!
//! Holds the current `DashboardStats` record and builds the summary cards
//! shown on the dashboard.

use std::fs;
use std::path::Path;

use super::format::{format_count, format_sar_millions};
use super::types::{DashboardStats, StatCard, Trend};
use crate::error::DashError;
use crate::theme;

impl DashboardStats {
    /// Parse a stats record from JSON text
    pub fn from_json(json: &str) -> Result<Self, DashError> {
        serde_json::from_str(json).map_err(|e| DashError::InvalidStats(e.to_string()))
    }

    /// Read and parse a stats record from a file
    pub fn from_file(path: &Path) -> Result<Self, DashError> {
        let contents = fs::read_to_string(path)?;

        #[cfg(debug_assertions)]
        log::debug!("Read stats file {:?}, {} bytes", path, contents.len());

        Self::from_json(&contents)
    }
}

/// State for the summary cards
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    stats: DashboardStats,
    cards: Vec<StatCard>,
}

impl StatsState {
    pub fn new(stats: DashboardStats) -> Self {
        let cards = stat_cards(&stats);
        Self { stats, cards }
    }

    /// Replace the record and rebuild the cards
    pub fn update(&mut self, stats: DashboardStats) {
        self.cards = stat_cards(&stats);
        self.stats = stats;
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// Empty until a record has been set
    pub fn cards(&self) -> &[StatCard] {
        &self.cards
    }
}

/// Build the six summary cards, in display order
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Cars",
            value: format_count(stats.total_cars),
            description: format!(
                "{} published, {} draft",
                stats.published_cars, stats.draft_cars
            ),
            trend: Trend::up("+12%"),
            accent: theme::stats::TOTAL_CARS,
        },
        StatCard {
            title: "Total Revenue",
            value: format_sar_millions(stats.total_revenue),
            description: format!("{} this month", format_sar_millions(stats.monthly_revenue)),
            trend: Trend::up("+8.2%"),
            accent: theme::stats::REVENUE,
        },
        StatCard {
            title: "Active Offers",
            value: stats.active_offers.to_string(),
            description: format!("{} total offers", stats.total_offers),
            trend: Trend::up("+3"),
            accent: theme::stats::OFFERS,
        },
        StatCard {
            title: "Featured Cars",
            value: stats.featured_cars.to_string(),
            description: "Premium showcase vehicles".to_string(),
            trend: Trend::up("+5"),
            accent: theme::stats::FEATURED,
        },
        StatCard {
            title: "Car Variants",
            value: format_count(stats.total_variants),
            description: "Different color options".to_string(),
            trend: Trend::up("+18"),
            accent: theme::stats::VARIANTS,
        },
        StatCard {
            title: "Brands",
            value: stats.total_brands.to_string(),
            description: "Active automotive brands".to_string(),
            trend: Trend::up("0"),
            accent: theme::stats::BRANDS,
        },
    ]
}
