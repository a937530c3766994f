//! Shared test utilities for dealerdash
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::stats::DashboardStats;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Catalog totals used by most app tests
    pub fn test_stats() -> DashboardStats {
        DashboardStats {
            total_cars: 1_284,
            total_brands: 18,
            total_offers: 40,
            total_variants: 5_312,
            featured_cars: 24,
            published_cars: 1_200,
            draft_cars: 84,
            active_offers: 12,
            total_revenue: 48_500_000.0,
            monthly_revenue: 3_200_000.0,
        }
    }

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(test_stats(), Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
