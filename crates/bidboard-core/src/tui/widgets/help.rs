//! Help popup: per-tab key reference, scrollable.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::state::Tab;
use crate::tui::style::Styles;
use crate::view::bids::PAGE_SIZE;

use super::popup::{centered, hint_spans, open_frame};

/// A titled group of `key - description` entries.
type Section = (&'static str, &'static [(&'static str, &'static str)]);

const BIDS_SECTIONS: &[Section] = &[
    (
        "Columns",
        &[
            ("PROJECT", "project name"),
            ("DATE", "bid date (Month Dth, YYYY)"),
            ("STATUS", "Active (green) or Completed (cyan)"),
            ("AMOUNT", "bid amount; yellow when it is not a number"),
        ],
    ),
    (
        "Filters (combined with AND)",
        &[
            ("a", "cycle status: all → active → completed"),
            ("/", "search project name (case-insensitive, live)"),
            ("m / M", "minimum / maximum amount (inclusive)"),
            ("f / t", "start / end date (inclusive, needs both)"),
            ("x", "reset filters, sort and page"),
        ],
    ),
    (
        "Sorting",
        &[
            ("1-4", "sort by column; again to flip direction"),
            ("s", "cycle sort column (none/project/date/amount/status)"),
            ("r", "toggle ascending/descending"),
        ],
    ),
    (
        "Navigation",
        &[
            ("←/→ p/n", "previous/next page"),
            ("↑/↓ k/j", "select row"),
            ("Enter", "bid details"),
            ("b", "toggle Auto-Bidding"),
        ],
    ),
];

const SKILLS_SECTIONS: &[Section] = &[
    (
        "Lists",
        &[
            ("←/→", "switch between included and excluded"),
            ("↑/↓", "select skill"),
            ("Space", "turn included skill on/off"),
            ("e", "add excluded skill"),
            ("d", "delete selected excluded skill"),
            ("v", "show projects for excluded skills"),
        ],
    ),
    (
        "Priorities",
        &[
            ("o", "edit included skill order"),
            ("K / J", "move selected skill up / down"),
            ("R", "reset to the initial order"),
            ("Enter", "save order"),
            ("Esc", "discard changes"),
        ],
    ),
];

const SKILLSETS_SECTIONS: &[Section] = &[
    (
        "List",
        &[
            ("/", "search name or skills (live)"),
            ("←/→ p/n", "previous/next page"),
            ("s", "rows per page: 10 → 20 → 30"),
        ],
    ),
    (
        "Edit",
        &[
            ("a", "add skill set (name, then skills)"),
            ("Enter / e", "edit selected skill set"),
            ("d", "delete selected skill set (asks first)"),
        ],
    ),
];

const PROFILES_SECTIONS: &[Section] = &[
    (
        "List",
        &[
            ("/", "search title or skills (live)"),
            ("r", "refresh profiles"),
            ("Enter / e", "edit selected profile"),
        ],
    ),
    (
        "Editor",
        &[
            ("Space", "check/uncheck applicable skill"),
            ("A / U", "check all / uncheck all"),
            ("t", "edit profile title"),
            ("r", "edit hourly rate"),
            ("Enter", "save profile"),
            ("Esc", "discard changes"),
        ],
    ),
];

const AI_BIDDING_SECTIONS: &[Section] = &[(
    "Filters",
    &[
        ("←/→", "switch between filters and countries"),
        ("Space / Enter", "next option, or type a number"),
        ("Space", "turn country on/off (countries list)"),
        ("s", "save settings"),
    ],
)];

const BID_LOG_SECTIONS: &[Section] = &[(
    "Log",
    &[
        ("←/→ p/n", "previous/next month"),
        ("↑/↓", "scroll days"),
    ],
)];

const PASSWORD_SECTIONS: &[Section] = &[(
    "Form",
    &[
        ("↑/↓", "select field"),
        ("Enter", "type the selected field"),
        ("s", "change password"),
    ],
)];

const GENERAL: Section = (
    "General",
    &[
        ("Tab / Shift+Tab", "switch tab"),
        ("? / h", "toggle this help"),
        ("q", "quit (with confirmation)"),
        ("Ctrl+C", "quit immediately"),
    ],
);

pub fn render_help(frame: &mut Frame, area: Rect, tab: Tab, scroll: &mut usize) {
    let height = (area.height * 80 / 100).clamp(10, 30);
    let (title, content) = help_content(tab);
    let inner = open_frame(frame, centered(area, 60, 40, 80, height), title);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    *scroll = (*scroll).min(max_scroll);

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .scroll((*scroll as u16, 0))
            .style(Styles::default()),
        chunks[0],
    );

    let mut footer = hint_spans(&[("?/h", "close"), ("↑↓", "scroll")]);
    if max_scroll > 0 {
        footer.push(Span::styled(
            format!(" [{}/{}]", *scroll + 1, max_scroll + 1),
            Styles::dim(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(footer)), chunks[1]);
}

fn help_content(tab: Tab) -> (&'static str, Vec<Line<'static>>) {
    let (title, lead, sections) = match tab {
        Tab::Bids => (
            "Bids Help",
            format!("Bid list: filter → sort → paginate ({} bids per page)", PAGE_SIZE),
            BIDS_SECTIONS,
        ),
        Tab::Skills => (
            "Skills Help",
            "Skills used to match projects for bidding".to_string(),
            SKILLS_SECTIONS,
        ),
        Tab::Skillsets => (
            "Skill Sets Help",
            "Named groups of skills".to_string(),
            SKILLSETS_SECTIONS,
        ),
        Tab::Profiles => (
            "Profiles Help",
            "Freelancer profiles used when bidding".to_string(),
            PROFILES_SECTIONS,
        ),
        Tab::AiBidding => (
            "AI Bids Help",
            "Projects that miss these filters get a regular bid".to_string(),
            AI_BIDDING_SECTIONS,
        ),
        Tab::BidLog => (
            "Bid Log Help",
            "AI bids placed per day, one month at a time".to_string(),
            BID_LOG_SECTIONS,
        ),
        Tab::Password => (
            "Password Help",
            "All fields are required; the new password must be typed twice".to_string(),
            PASSWORD_SECTIONS,
        ),
    };

    let mut lines = vec![Line::from(Span::styled(lead, Styles::lead())), Line::from("")];
    for (name, entries) in sections.iter().chain(std::iter::once(&GENERAL)) {
        let key_width = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!("{}:", name),
            Styles::section_header(),
        )));
        for (key, what) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<w$}", key, w = key_width), Styles::key()),
                Span::raw(format!(" - {}", what)),
            ]));
        }
        lines.push(Line::from(""));
    }
    (title, lines)
}
