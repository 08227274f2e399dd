//! Popup placement and background for dropdown lists

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Clear, Widget},
    Frame,
};

/// Configuration for popup appearance
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    /// Fill color behind the popup (None = terminal default)
    pub bg_color: Option<Color>,
    /// Border color of the popup block
    pub border_color: Color,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            bg_color: None,
            border_color: Color::Cyan,
        }
    }
}

impl PopupStyle {
    pub fn with_bg(bg_color: Color) -> Self {
        Self {
            bg_color: Some(bg_color),
            ..Default::default()
        }
    }
}

/// Rectangle for a popup of `rows` content lines directly under `anchor`
///
/// Adds two rows for the border and clamps to `bounds`. If there is no room
/// below the anchor the popup opens above it instead. Width follows the anchor.
pub fn popup_below(anchor: Rect, rows: usize, bounds: Rect) -> Rect {
    let wanted = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);
    let anchor_bottom = anchor.y.saturating_add(anchor.height);

    let space_below = bounds_bottom.saturating_sub(anchor_bottom);
    let space_above = anchor.y.saturating_sub(bounds.y);

    let x = anchor.x.max(bounds.x);
    let width = anchor
        .width
        .min(bounds.x.saturating_add(bounds.width).saturating_sub(x));

    if space_below >= wanted.min(3) || space_below >= space_above {
        Rect::new(x, anchor_bottom, width, wanted.min(space_below))
    } else {
        let height = wanted.min(space_above);
        Rect::new(x, anchor.y - height, width, height)
    }
}

/// Clear whatever was drawn under `area` and fill it with the popup background
///
/// Call after rendering the content the popup overlaps.
pub fn render_popup_background(frame: &mut Frame, area: Rect, style: &PopupStyle) {
    frame.render_widget(Clear, area);
    if let Some(bg) = style.bg_color {
        frame.render_widget(BgFill(bg), area);
    }
}

/// Fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_bg(self.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_select_core::testing::RenderHarness;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_popup_below_anchor() {
        let bounds = Rect::new(0, 0, 40, 20);
        let anchor = Rect::new(2, 1, 30, 1);

        let popup = popup_below(anchor, 5, bounds);
        assert_eq!(popup, Rect::new(2, 2, 30, 7));
    }

    #[test]
    fn test_popup_clamped_to_bounds() {
        let bounds = Rect::new(0, 0, 40, 10);
        let anchor = Rect::new(0, 0, 40, 1);

        let popup = popup_below(anchor, 50, bounds);
        assert_eq!(popup.y, 1);
        assert_eq!(popup.height, 9);
    }

    #[test]
    fn test_popup_flips_above_when_no_room() {
        let bounds = Rect::new(0, 0, 40, 10);
        let anchor = Rect::new(0, 9, 20, 1);

        let popup = popup_below(anchor, 3, bounds);
        assert_eq!(popup, Rect::new(0, 4, 20, 5));
    }

    #[test]
    fn test_popup_background_clears_content() {
        let mut harness = RenderHarness::new(20, 3);

        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("underneath"), frame.area());
            render_popup_background(
                frame,
                Rect::new(0, 0, 20, 1),
                &PopupStyle::with_bg(Color::Rgb(30, 30, 40)),
            );
        });

        assert!(!output.contains("underneath"));
    }
}
