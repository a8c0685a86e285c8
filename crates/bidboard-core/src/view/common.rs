//! Tables as plain data: text cells plus a style class, so the dump output
//! and tests can read the same rows the TUI draws.

/// Color role of a row or cell; the TUI picks the actual colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level (TUI: yellow). E.g. an amount that does not parse.
    Warning,
    /// Positive/active (TUI: green). E.g. "active" bids, enabled skills.
    Active,
    /// Dimmed (TUI: dark gray). E.g. disabled skills.
    Dimmed,
    /// Accent (TUI: cyan). E.g. "completed" bids.
    Accent,
}

/// Cell text, optionally styled apart from its row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// A row keyed by the ID of what it shows (bid ID, skill index).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Title, headers, rows, and footer of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    /// Fixed widths for the leading columns; the rest share the remaining space.
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    /// `None` when the rows are in their natural order.
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
    /// Shown under the table (pagination, hints). Empty = no footer.
    pub footer: String,
}

impl<Id> TableViewModel<Id> {
    /// Header labels with a sort arrow on the sorted column.
    pub fn decorated_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if Some(i) == self.sort_column {
                    let arrow = if self.sort_ascending { "▲" } else { "▼" };
                    format!("{h}{arrow}")
                } else {
                    h.clone()
                }
            })
            .collect()
    }
}
