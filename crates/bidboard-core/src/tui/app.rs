//! Application loop: owns the terminal and the state, feeds events into
//! `handle_key`, and redraws after each one.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::Local;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::provider::{BidSource, SourceError};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Loads bids from `source`; today's date comes from the local clock.
    pub fn new(source: &dyn BidSource, autobid_delay: Duration) -> Result<Self, SourceError> {
        let bids = source.load()?;
        info!(source = %source.describe(), count = bids.len(), "loaded bids");
        Ok(Self {
            state: AppState::new(bids, autobid_delay, Local::now().date_naive()),
            should_quit: false,
        })
    }

    /// Takes over the terminal until the user quits. The terminal is restored
    /// even when drawing fails.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        let mut terminal = enter_terminal()?;
        if let Ok(size) = terminal.size() {
            self.state.terminal_width = size.width;
        }

        let events = EventHandler::new(tick_rate);
        let result = self.event_loop(&mut terminal, &events);

        leave_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Term, events: &EventHandler) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| render(frame, &mut self.state))?;
            match events.next() {
                Ok(event) => self.handle_event(event),
                Err(_) => self.should_quit = true,
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => match handle_key(&mut self.state, key) {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::ToggleAutoBid => {
                    self.state.autobid.request_toggle();
                }
                KeyAction::None => {}
            },
            Event::Resize(width) if width != self.state.terminal_width => {
                debug!(width, "terminal resized");
                self.state.terminal_width = width;
            }
            Event::Resize(_) => {}
        }
    }

    /// Picks up a finished auto-bidding request and shows its notice.
    fn on_tick(&mut self) {
        if let Some(notice) = self.state.autobid.poll() {
            info!(enabled = notice.enabled, "auto-bidding updated");
            self.state.status_message = Some(notice.message().to_string());
        }
    }
}

fn enter_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
