//! Bid detail popup (Enter on the BIDS tab).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::{format_amount, format_bid_date};
use crate::model::Bid;
use crate::tui::style::Styles;

use super::popup::{centered, hint_spans, open_frame};

fn field(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Styles::key()),
        Span::styled(value, style),
    ])
}

/// Shows every field of `bid`.
pub fn render_bid_detail(frame: &mut Frame, area: Rect, bid: &Bid) {
    let title = format!("Bid #{}", bid.id);
    let inner = open_frame(frame, centered(area, 50, 40, 64, 8), &title);

    // Raw amount stays visible when it does not parse.
    let amount = match bid.amount_value() {
        Some(value) => field("Amount", format_amount(value), Styles::default()),
        None => field(
            "Amount",
            format!("{} (unparsed)", bid.amount),
            Styles::warning(),
        ),
    };

    let content = vec![
        field("Project", bid.project.clone(), Styles::default()),
        field("Date", format_bid_date(&bid.date), Styles::default()),
        amount,
        field(
            "Status",
            bid.status.label().to_string(),
            Styles::status(bid.status),
        ),
        Line::from(""),
        Line::from(hint_spans(&[("Esc", "close")])),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}
