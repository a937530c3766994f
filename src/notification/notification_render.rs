//! Notification rendering
//!
//! Draws the active set as a stack of toasts in the top-right corner,
//! oldest at the top. The focused toast gets a heavy border; it is the one
//! the close and action keys act on.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::notification_state::{Notification, NotificationId, NotificationManager};
use crate::widgets::popup;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;
const MARGIN: u16 = 1;
const CLOSE_HINT: &str = " \u{2715} ";

/// Render the notification stack.
///
/// Call after the main UI so toasts draw on top. At most `max_visible`
/// notifications are drawn (the newest ones); toasts that do not fit the
/// frame height are skipped.
pub fn render_notifications(
    frame: &mut Frame,
    manager: &NotificationManager,
    max_visible: usize,
    focused: Option<NotificationId>,
) {
    let frame_area = frame.area();
    let mut y = frame_area.y + MARGIN;

    for notif in manager.visible(max_visible) {
        let lines = toast_lines(notif);
        let height = lines.len() as u16 + 2;
        let area = popup::right_aligned_popup(frame_area, y, toast_width(notif), height, MARGIN);

        // Don't render a toast that would be cut off
        if area.width < 5 || area.height < height {
            break;
        }

        render_toast(frame, notif, lines, area, focused == Some(notif.id()));
        y += height;
    }
}

fn render_toast(
    frame: &mut Frame,
    notif: &Notification,
    lines: Vec<Line<'static>>,
    area: Rect,
    focused: bool,
) {
    let style = notif.style();

    popup::clear_area(frame, area);

    let (border_type, border_style) = if focused {
        (
            BorderType::Thick,
            Style::default()
                .fg(style.fg)
                .bg(style.bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            BorderType::Plain,
            Style::default().fg(style.border).bg(style.bg),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title_top(Line::from(CLOSE_HINT).right_aligned())
        .style(Style::default().fg(style.fg).bg(style.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn toast_lines(notif: &Notification) -> Vec<Line<'static>> {
    let inner = (toast_width(notif) - 4) as usize;
    let style = notif.style();

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", notif.kind().icon()),
            Style::default().fg(style.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate(notif.title(), inner.saturating_sub(3)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(message) = notif.message() {
        lines.push(Line::from(format!("   {}", truncate(message, inner.saturating_sub(3)))));
    }

    if let Some(label) = notif.action_label() {
        lines.push(Line::from(Span::styled(
            format!("   [ {} ]", truncate(label, inner.saturating_sub(7))),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines
}

fn toast_width(notif: &Notification) -> u16 {
    let longest = [
        Some(notif.title()),
        notif.message(),
        notif.action_label().map(|l| l.trim()),
    ]
    .into_iter()
    .flatten()
    .map(|s| s.chars().count())
    .max()
    .unwrap_or(0);

    // icon column (3) + borders (2) + padding (2) + room for the close hint
    let wanted = (longest + 9).min(u16::MAX as usize) as u16;
    wanted.clamp(MIN_WIDTH, MAX_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
