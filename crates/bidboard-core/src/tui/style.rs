//! Palette and named styles for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::model::BidStatus;
use crate::view::common::RowStyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const TEXT: Color = Color::White;
    pub const MUTED: Color = Color::DarkGray;

    // Header bar and table headers
    pub const BAR_FG: Color = Color::White;
    pub const BAR_BG: Color = Color::Blue;
    pub const CURSOR_BG: Color = Color::DarkGray;

    // Bid status and auto-bidding state
    pub const ACTIVE_BID: Color = Color::Green;
    pub const COMPLETED_BID: Color = Color::Cyan;
    pub const CAUTION: Color = Color::Yellow;
    pub const FAILURE: Color = Color::Red;

    // Popups and hints
    pub const FRAME: Color = Color::Cyan;
    pub const KEY: Color = Color::Yellow;

    pub const CHART: Color = Color::Cyan;
}

/// Named styles used by the widgets.
pub struct Styles;

impl Styles {
    /// Body text.
    pub fn default() -> Style {
        Style::default().fg(Theme::TEXT).bg(Color::Reset)
    }

    /// Top bar and table header row.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::BAR_FG)
            .bg(Theme::BAR_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::CURSOR_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Auto-bidding ON, passed bids.
    pub fn on() -> Style {
        Style::default()
            .fg(Theme::ACTIVE_BID)
            .add_modifier(Modifier::BOLD)
    }

    /// Auto-bidding OFF, failed bids.
    pub fn off() -> Style {
        Style::default().fg(Theme::FAILURE)
    }

    /// Pending requests, unparseable amounts, empty results.
    pub fn warning() -> Style {
        Style::default().fg(Theme::CAUTION)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::FAILURE)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::FRAME)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::MUTED)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::MUTED)
    }

    pub fn chart() -> Style {
        Style::default().fg(Theme::CHART)
    }

    /// Live search text in the header.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::TEXT)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Typed text inside an input popup.
    pub fn typed() -> Style {
        Style::default()
            .fg(Theme::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel and help section titles.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Theme::CAUTION)
            .add_modifier(Modifier::BOLD)
    }

    /// Key names in hint lines and field labels in popups.
    pub fn key() -> Style {
        Style::default().fg(Theme::KEY)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Theme::FRAME)
    }

    /// Intro line of a help page.
    pub fn lead() -> Style {
        Style::default().fg(Theme::FRAME)
    }

    pub fn status(status: BidStatus) -> Style {
        match status {
            BidStatus::Active => Self::on(),
            BidStatus::Completed => Style::default().fg(Theme::COMPLETED_BID),
        }
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Warning => Self::warning(),
            RowStyleClass::Active => Style::default().fg(Theme::ACTIVE_BID),
            RowStyleClass::Dimmed => Self::dim(),
            RowStyleClass::Accent => Style::default().fg(Theme::COMPLETED_BID),
        }
    }
}
