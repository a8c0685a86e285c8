//! Maps a UI-agnostic [`TableViewModel`] to a ratatui [`Table`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};

use crate::tui::style::Styles;
use crate::view::common::TableViewModel;

/// Builds a bordered table. `focused` controls whether the selected row is
/// highlighted; the selection itself lives in the caller's ratatui state.
pub fn build_table<Id>(vm: &TableViewModel<Id>, focused: bool) -> Table<'static> {
    let headers: Vec<Span> = vm
        .decorated_headers()
        .into_iter()
        .map(|h| Span::styled(h, Styles::header()))
        .collect();
    let header = Row::new(headers).style(Styles::header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells).style(Styles::from_class(vr.style)).height(1)
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
    if constraints.len() < vm.headers.len() {
        constraints.push(Constraint::Fill(1));
    }

    let border_style = if focused {
        Styles::tab_active()
    } else {
        Styles::default()
    };

    Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ", vm.title))
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(if focused {
            Styles::selected()
        } else {
            Styles::default()
        })
}

/// Draws a table with its footer line underneath.
pub fn render_table_with_footer<Id>(
    frame: &mut Frame,
    area: Rect,
    vm: &TableViewModel<Id>,
    table_state: &mut TableState,
    focused: bool,
) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    frame.render_widget(Clear, chunks[0]);
    frame.render_stateful_widget(build_table(vm, focused), chunks[0], table_state);
    frame.render_widget(
        Paragraph::new(format!(" {}", vm.footer)).style(Styles::dim()),
        chunks[1],
    );
}
