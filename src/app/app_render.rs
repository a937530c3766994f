use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notifications;
use crate::theme;

const TITLE: &str = "Alromaih Cars Dashboard";
const CARDS_HEIGHT: u16 = 10;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(CARDS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        crate::stats::stats_render::render_cards(frame, layout[1], &self.stats);
        self.render_activity(frame, layout[2]);
        crate::help::help_line_render::render_line(self, frame, layout[3]);

        // Drawn last so toasts sit above everything else
        render_notifications(
            frame,
            &self.notifications,
            self.config.notifications.max_visible,
            self.focused_notification(),
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(format!(" {} ", TITLE), theme::header::TITLE),
            Span::styled(
                format!(" {} ", self.config.api.graphql_url()),
                Style::default().fg(theme::header::ENDPOINT),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(theme::header::BACKGROUND)),
            area,
        );
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::stats::BORDER))
            .title(Span::styled(
                " Recent Activity ",
                Style::default().fg(theme::stats::TITLE),
            ));

        let lines: Vec<Line> = if self.activity.is_empty() {
            vec![Line::from(Span::styled(
                " No recent activity",
                Style::default().fg(theme::stats::DESCRIPTION),
            ))]
        } else {
            self.activity
                .recent()
                .into_iter()
                .map(|entry| Line::from(format!(" {}", entry)))
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
