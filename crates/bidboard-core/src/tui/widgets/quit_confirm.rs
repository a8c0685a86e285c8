//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

use super::popup::{centered, hint_spans, open_frame};

/// Asks before quitting. An unfinished auto-bidding update is dropped on
/// exit, so it is called out.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect, autobid_pending: bool) {
    let height = if autobid_pending { 9 } else { 7 };
    let inner = open_frame(frame, centered(area, 50, 40, 60, height), "Exit bidboard");

    let mut content = vec![Line::from("Are you sure you want to quit?")];
    if autobid_pending {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Auto-Bidding update still in progress.",
            Styles::warning(),
        )));
    }
    content.push(Line::from(""));
    content.push(Line::from(hint_spans(&[
        ("Enter/q", "quit"),
        ("Esc/n", "cancel"),
    ])));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Styles::default()),
        inner,
    );
}
