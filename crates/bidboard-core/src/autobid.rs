//! Auto-bidding toggle.
//!
//! Switching auto-bidding on or off goes through a simulated request that
//! takes a fixed delay. The request runs on a worker thread and reports the
//! new value over a channel; the UI polls for it on every tick.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

/// Latency of the simulated toggle request.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Result of a completed toggle, shown to the user as a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoBidNotice {
    pub enabled: bool,
}

impl AutoBidNotice {
    pub fn message(&self) -> &'static str {
        if self.enabled {
            "Auto-Bidding has been turned on."
        } else {
            "Auto-Bidding has been turned off."
        }
    }
}

/// Auto-bidding switch with at most one in-flight request.
#[derive(Debug)]
pub struct AutoBidding {
    enabled: bool,
    delay: Duration,
    pending: Option<Receiver<bool>>,
}

impl Default for AutoBidding {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl AutoBidding {
    pub fn new(delay: Duration) -> Self {
        Self {
            enabled: false,
            delay,
            pending: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a toggle request. Ignored while another one is in flight.
    pub fn request_toggle(&mut self) -> bool {
        if self.pending.is_some() {
            debug!("auto-bidding toggle already pending");
            return false;
        }

        let target = !self.enabled;
        let delay = self.delay;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            thread::sleep(delay);
            // Receiver may be gone if the app quit meanwhile.
            let _ = tx.send(target);
        });

        debug!(target, ?delay, "auto-bidding toggle requested");
        self.pending = Some(rx);
        true
    }

    /// Applies a finished request, if any. Never blocks.
    pub fn poll(&mut self) -> Option<AutoBidNotice> {
        let result = self.pending.as_ref()?.try_recv();
        match result {
            Ok(enabled) => Some(self.complete(enabled)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("auto-bidding worker exited without a result");
                self.pending = None;
                None
            }
        }
    }

    /// Blocks until the in-flight request finishes or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<AutoBidNotice> {
        let result = self.pending.as_ref()?.recv_timeout(timeout);
        match result {
            Ok(enabled) => Some(self.complete(enabled)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                warn!("auto-bidding worker exited without a result");
                self.pending = None;
                None
            }
        }
    }

    fn complete(&mut self, enabled: bool) -> AutoBidNotice {
        self.enabled = enabled;
        self.pending = None;
        debug!(enabled, "auto-bidding toggled");
        AutoBidNotice { enabled }
    }
}
