//! Shared popup chrome: placement, frame, and key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};

use crate::tui::style::Styles;

/// Centers a popup of `width_pct` percent of `area`, width clamped to
/// `min_w..=max_w`, height clamped to the screen.
pub fn centered(area: Rect, width_pct: u16, min_w: u16, max_w: u16, height: u16) -> Rect {
    let width = (area.width * width_pct / 100).clamp(min_w, max_w).min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Clears `popup`, draws a titled frame over it, and returns the inner area.
pub fn open_frame(frame: &mut Frame, popup: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    inner
}

/// `Enter → apply` style hint: keys highlighted, the rest dimmed.
pub fn hint_spans(pairs: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, (key, what)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", Styles::dim()));
        }
        spans.push(Span::styled(*key, Styles::key()));
        spans.push(Span::styled(format!(" → {}", what), Styles::dim()));
    }
    spans
}
