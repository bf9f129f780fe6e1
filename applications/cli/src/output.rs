//! Logging audio backend
//!
//! The terminal has no audio device, so starts and stops are reported through
//! tracing and recorded for the final summary.

use keepsake_core::ItemId;
use keepsake_playback::{ClipOutput, TrackOutput, Volume};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCall {
    Start(ItemId),
    Stop(ItemId),
}

impl fmt::Display for ClipCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipCall::Start(id) => write!(f, "start {id}"),
            ClipCall::Stop(id) => write!(f, "stop {id}"),
        }
    }
}

/// Clip output that logs every request
#[derive(Debug)]
pub struct LogClips {
    slot: &'static str,
    calls: Vec<ClipCall>,
}

impl LogClips {
    pub fn new(slot: &'static str) -> Self {
        Self {
            slot,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[ClipCall] {
        &self.calls
    }
}

impl ClipOutput for LogClips {
    fn start(&mut self, id: ItemId) {
        info!(slot = self.slot, id = %id, "Starting clip");
        self.calls.push(ClipCall::Start(id));
    }

    fn stop(&mut self, id: ItemId) {
        info!(slot = self.slot, id = %id, "Stopping clip");
        self.calls.push(ClipCall::Stop(id));
    }
}

/// Background output that logs every request
#[derive(Debug)]
pub struct LogTrack {
    source: String,
    starts: usize,
    stops: usize,
}

impl LogTrack {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            starts: 0,
            stops: 0,
        }
    }

    pub fn starts(&self) -> usize {
        self.starts
    }

    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl TrackOutput for LogTrack {
    fn start(&mut self) {
        self.starts += 1;
        info!(source = %self.source, "Starting background track");
    }

    fn stop(&mut self) {
        self.stops += 1;
        info!(source = %self.source, "Pausing background track");
    }

    fn apply_volume(&mut self, volume: &Volume) {
        debug!(
            level = volume.level(),
            muted = volume.is_muted(),
            "Applying background volume"
        );
    }
}
