//! Popup editor for a single text value: filter bounds and new excluded
//! skills.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::style::Styles;

use super::popup::{centered, hint_spans, open_frame};

pub fn render_input_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &str,
    examples: &[&str],
    error: Option<&str>,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Input: ", Styles::key()),
            Span::styled(format!("{}█", input), Styles::typed()),
        ]),
        Line::from(""),
    ];

    if !examples.is_empty() {
        lines.push(Line::from(Span::styled("Examples:", Styles::dim())));
        for example in examples {
            lines.push(Line::from(Span::styled(
                format!("  {}", example),
                Styles::dim(),
            )));
        }
    }

    if let Some(err) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {}", err),
            Styles::error(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(hint_spans(&[("Enter", "apply"), ("Esc", "cancel")])));

    // Content plus the two border rows.
    let height = lines.len() as u16 + 2;
    let inner = open_frame(frame, centered(area, 60, 44, 72, height), title);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Styles::default()),
        inner,
    );
}
