use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size against the right edge of `frame_area`, starting
/// at row `y`. Clamped to the frame.
pub fn right_aligned_popup(frame_area: Rect, y: u16, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let bottom = frame_area.y + frame_area.height;
    let y = y.clamp(frame_area.y, bottom);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y,
        width,
        height: height.min(bottom - y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        }
    }

    #[test]
    fn test_right_aligned_popup_basic() {
        let popup = right_aligned_popup(frame(), 1, 30, 4, 1);

        assert_eq!(popup.x, 69);
        assert_eq!(popup.y, 1);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 4);
    }

    #[test]
    fn test_right_aligned_popup_too_wide_is_clamped() {
        let popup = right_aligned_popup(frame(), 0, 200, 4, 2);

        assert_eq!(popup.width, 96);
        assert_eq!(popup.x, 2);
    }

    #[test]
    fn test_right_aligned_popup_height_clamped_to_bottom() {
        let popup = right_aligned_popup(frame(), 48, 10, 5, 1);

        assert_eq!(popup.y, 48);
        assert_eq!(popup.height, 2);
    }

    #[test]
    fn test_right_aligned_popup_respects_frame_offset() {
        let area = Rect {
            x: 10,
            y: 5,
            width: 40,
            height: 20,
        };
        let popup = right_aligned_popup(area, 0, 10, 3, 1);

        assert_eq!(popup.x, 39);
        assert_eq!(popup.y, 5);
    }
}
