//! Delete confirmation for a skill set.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

use super::popup::{centered, hint_spans, open_frame};

pub fn render_confirm_delete(frame: &mut Frame, area: Rect, name: &str) {
    let inner = open_frame(frame, centered(area, 50, 40, 60, 7), "Delete skill set");
    let content = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(name.to_string(), Styles::warning()),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(hint_spans(&[("Enter/y", "delete"), ("Esc/n", "cancel")])),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Styles::default()),
        inner,
    );
}
