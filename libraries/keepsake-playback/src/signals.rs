//! Background ducking signals
//!
//! Foreground slots tell the background track to get out of the way through
//! an injected [`BackgroundSignals`] sink instead of a global event bus.
//! Signals are delivered synchronously, in emission order.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Payload-less signal from a foreground slot to the background track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundSignal {
    /// A foreground item began playing
    PauseRequested,

    /// Foreground playback stopped (pause, natural end, or error)
    ResumeRequested,
}

impl BackgroundSignal {
    /// Event name used by browser shells
    pub fn event_name(self) -> &'static str {
        match self {
            BackgroundSignal::PauseRequested => "pauseBackgroundMusic",
            BackgroundSignal::ResumeRequested => "resumeBackgroundMusic",
        }
    }
}

/// Receiver of background signals
pub trait BackgroundSignals {
    fn send(&mut self, signal: BackgroundSignal);
}

/// Sink that drops every signal
///
/// For slots that must not duck the background track, such as the welcome
/// greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSignals;

impl BackgroundSignals for NoSignals {
    fn send(&mut self, _signal: BackgroundSignal) {}
}

/// Sink that records every signal, shareable between a slot and an observer
#[derive(Debug, Default, Clone)]
pub struct SignalLog {
    signals: Rc<RefCell<Vec<BackgroundSignal>>>,
}

impl SignalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals received so far
    pub fn signals(&self) -> Vec<BackgroundSignal> {
        self.signals.borrow().clone()
    }

    pub fn count(&self, signal: BackgroundSignal) -> usize {
        self.signals.borrow().iter().filter(|s| **s == signal).count()
    }

    pub fn clear(&self) {
        self.signals.borrow_mut().clear();
    }
}

impl BackgroundSignals for SignalLog {
    fn send(&mut self, signal: BackgroundSignal) {
        self.signals.borrow_mut().push(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_browser_events() {
        assert_eq!(BackgroundSignal::PauseRequested.event_name(), "pauseBackgroundMusic");
        assert_eq!(BackgroundSignal::ResumeRequested.event_name(), "resumeBackgroundMusic");
    }

    #[test]
    fn log_clones_share_history() {
        let log = SignalLog::new();
        let mut sink = log.clone();

        sink.send(BackgroundSignal::PauseRequested);
        sink.send(BackgroundSignal::ResumeRequested);

        assert_eq!(
            log.signals(),
            vec![BackgroundSignal::PauseRequested, BackgroundSignal::ResumeRequested]
        );
        assert_eq!(log.count(BackgroundSignal::PauseRequested), 1);
    }
}
