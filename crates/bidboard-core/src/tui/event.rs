//! Terminal input and ticks, delivered over a channel from a reader thread.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self as term, Event as TermEvent, KeyEvent, KeyEventKind};

#[derive(Debug)]
pub enum Event {
    /// No input within one tick; background work is polled here.
    Tick,
    Key(KeyEvent),
    /// New terminal width.
    Resize(u16),
}

impl Event {
    /// Maps a crossterm event. Key releases and repeats, mouse, focus, and
    /// paste events are dropped.
    fn from_terminal(event: TermEvent) -> Option<Event> {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            TermEvent::Resize(width, _) => Some(Event::Resize(width)),
            _ => None,
        }
    }
}

/// Owns the reader thread. Dropping the handler ends it on the next send.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Keeps `next()` blocking instead of failing if the reader dies.
    _tx: Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let reader_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let ready = term::poll(tick_rate).unwrap_or(false);
                let event = if !ready {
                    Event::Tick
                } else {
                    match term::read().ok().and_then(Event::from_terminal) {
                        Some(event) => event,
                        None => continue,
                    }
                };
                if reader_tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}
