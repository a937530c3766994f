//! Stats card grid rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::stats_state::StatsState;
use super::types::StatCard;
use crate::theme;

const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 5;

/// Render the cards as a grid, three per row
pub fn render_cards(frame: &mut Frame, area: Rect, stats: &StatsState) {
    let cards = stats.cards();
    if cards.is_empty() {
        return;
    }

    let rows = cards.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

    for (row, chunk) in cards.chunks(COLUMNS).enumerate() {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[row]);
        for (card, card_area) in chunk.iter().zip(cols.iter()) {
            render_card(frame, *card_area, card);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    if area.height < 3 || area.width < 4 {
        return;
    }

    let trend_color = if card.trend.positive {
        theme::stats::TREND_UP
    } else {
        theme::stats::TREND_DOWN
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::stats::BORDER))
        .title(Line::from(vec![
            Span::styled(" \u{25cf} ", Style::default().fg(card.accent)),
            Span::styled(format!("{} ", card.title), Style::default().fg(theme::stats::TITLE)),
        ]))
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", card.trend),
                Style::default().fg(trend_color),
            ))
            .right_aligned(),
        )
        .style(Style::default().bg(theme::stats::BACKGROUND));

    let text = vec![
        Line::from(Span::styled(format!(" {}", card.value), theme::stats::VALUE)),
        Line::from(Span::styled(
            format!(" {}", card.description),
            Style::default().fg(theme::stats::DESCRIPTION),
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DashboardStats;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(stats: &StatsState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_cards(f, area, stats);
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_grid_shows_all_cards() {
        let stats = StatsState::new(DashboardStats {
            total_cars: 42,
            total_brands: 7,
            ..Default::default()
        });

        let output = render_to_string(&stats, 120, 12);
        for title in ["Total Cars", "Total Revenue", "Active Offers", "Featured Cars", "Car Variants", "Brands"] {
            assert!(output.contains(title), "missing card {}", title);
        }
        assert!(output.contains("42"));
        assert!(output.contains("+12%"));
    }

    #[test]
    fn test_first_row_holds_three_cards() {
        let stats = StatsState::new(DashboardStats::default());
        let output = render_to_string(&stats, 120, 12);

        let first_row = output.lines().next().unwrap();
        assert!(first_row.contains("Total Cars"));
        assert!(first_row.contains("Total Revenue"));
        assert!(first_row.contains("Active Offers"));
        assert!(!first_row.contains("Brands"));
    }

    #[test]
    fn test_empty_state_renders_nothing() {
        let output = render_to_string(&StatsState::default(), 60, 10);
        assert!(!output.contains("Total Cars"));
    }
}
