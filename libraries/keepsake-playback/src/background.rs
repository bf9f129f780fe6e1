//! Background track - the looping ambient music
//!
//! Independent of the foreground slots: it only hears their pause/resume
//! signals. The track is `Playing` only once the platform confirms a start;
//! a pending start that is rejected leaves it `Paused`, except when the user
//! pressed play, which marks the track `Errored` like a load failure does.
//! `Errored` is terminal and ignores every control and signal.

use crate::{
    error::{PlaybackError, Result},
    events::{EventQueue, PlaybackEvent},
    output::TrackOutput,
    signals::{BackgroundSignal, BackgroundSignals},
    types::{BackgroundState, PlaybackConfig, StartReason},
    volume::Volume,
};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::{debug, warn};

pub struct BackgroundTrack<O: TrackOutput> {
    source: String,
    state: BackgroundState,
    pending: Option<StartReason>,
    awaiting_interaction: bool,
    autoplay: bool,
    volume: Volume,
    output: O,
    events: EventQueue,
}

impl<O: TrackOutput> BackgroundTrack<O> {
    /// Create a paused track for `source` (used in diagnostics only)
    pub fn new(source: impl Into<String>, output: O, config: &PlaybackConfig) -> Self {
        Self {
            source: source.into(),
            state: BackgroundState::Paused,
            pending: None,
            awaiting_interaction: false,
            autoplay: config.autoplay,
            volume: Volume::new(config.background_volume),
            output,
            events: EventQueue::default(),
        }
    }

    /// Mount: apply the initial volume and attempt autoplay if configured
    pub fn start(&mut self) {
        self.output.apply_volume(&self.volume);
        if self.autoplay {
            self.begin(StartReason::Autoplay);
        }
    }

    pub fn state(&self) -> BackgroundState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == BackgroundState::Playing
    }

    pub fn is_errored(&self) -> bool {
        self.state == BackgroundState::Errored
    }

    /// A start has been requested and its outcome is not known yet
    pub fn pending_start(&self) -> Option<StartReason> {
        self.pending
    }

    /// Autoplay was blocked; the next user interaction will retry once
    pub fn is_awaiting_interaction(&self) -> bool {
        self.awaiting_interaction
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain()
    }

    // ===== Signals =====

    /// A foreground item began playing: pause regardless of volume or mute
    pub fn pause_requested(&mut self) {
        if self.is_errored() {
            return;
        }
        // The click that started the foreground item must not also retry autoplay
        self.awaiting_interaction = false;
        self.halt();
    }

    /// Foreground playback stopped: try to resume once
    pub fn resume_requested(&mut self) {
        if self.is_errored() || self.is_playing() || self.pending.is_some() {
            return;
        }
        self.awaiting_interaction = false;
        self.begin(StartReason::Resume);
    }

    // ===== User controls =====

    /// Play/pause button
    pub fn toggle_play(&mut self) {
        if self.is_errored() {
            return;
        }
        if self.is_playing() || self.pending.is_some() {
            self.halt();
        } else {
            self.begin(StartReason::User);
        }
    }

    /// Like [`toggle_play`](Self::toggle_play), but reports an errored track
    pub fn try_toggle_play(&mut self) -> Result<()> {
        if self.is_errored() {
            return Err(PlaybackError::TrackErrored);
        }
        self.toggle_play();
        Ok(())
    }

    pub fn toggle_mute(&mut self) {
        if self.is_errored() {
            return;
        }
        self.volume.toggle_mute();
        self.volume_changed();
    }

    /// Volume slider (0.0-1.0); raising the volume above zero unmutes
    pub fn set_volume(&mut self, fraction: f32) {
        if self.is_errored() {
            return;
        }
        self.volume.set_fraction(fraction);
        if self.volume.level() > 0 && self.volume.is_muted() {
            self.volume.unmute();
        }
        self.volume_changed();
    }

    /// Any click anywhere in the page
    pub fn on_user_interaction(&mut self) {
        if self.awaiting_interaction && !self.is_errored() {
            self.awaiting_interaction = false;
            self.begin(StartReason::Interaction);
        }
    }

    // ===== Audio facility callbacks =====

    /// The platform confirmed the pending start
    pub fn on_started(&mut self) {
        if self.is_errored() {
            return;
        }
        if let Some(reason) = self.pending.take() {
            debug!(reason = ?reason, "Background track started");
            self.set_state(BackgroundState::Playing);
        }
    }

    /// The platform rejected the pending start
    pub fn on_play_rejected(&mut self) {
        if self.is_errored() {
            return;
        }
        let Some(reason) = self.pending.take() else {
            return;
        };

        warn!(reason = ?reason, source = %self.source, "Background track start rejected");
        match reason {
            StartReason::Autoplay => self.awaiting_interaction = true,
            StartReason::User => self.set_state(BackgroundState::Errored),
            StartReason::Interaction | StartReason::Resume => {}
        }
    }

    /// The background resource could not be loaded
    pub fn on_load_error(&mut self) {
        if self.is_errored() {
            return;
        }
        warn!(source = %self.source, "Background track failed to load");
        self.pending = None;
        self.awaiting_interaction = false;
        self.set_state(BackgroundState::Errored);
    }

    fn begin(&mut self, reason: StartReason) {
        debug!(reason = ?reason, "Starting background track");
        self.pending = Some(reason);
        self.output.start();
    }

    fn halt(&mut self) {
        if self.is_playing() || self.pending.is_some() {
            self.output.stop();
        }
        self.pending = None;
        if self.state != BackgroundState::Paused {
            self.set_state(BackgroundState::Paused);
        }
    }

    fn volume_changed(&mut self) {
        self.output.apply_volume(&self.volume);
        self.events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn set_state(&mut self, state: BackgroundState) {
        debug!(from = ?self.state, to = ?state, "Background transition");
        self.state = state;
        self.events.push(PlaybackEvent::BackgroundChanged { state });
    }
}

/// Shared handle to a background track
///
/// Foreground slots hold clones of this as their signal sink; the shell keeps
/// one to drive user controls and platform callbacks. Single-threaded only.
///
/// # Panics
///
/// The track is mutably borrowed while it runs a transition, including while
/// it calls into its [`TrackOutput`] and while a slot delivers a signal. An
/// output must report outcomes after `start`/`stop` return; calling back into
/// the handle from inside them panics with a `BorrowMutError`.
pub struct BackgroundHandle<O: TrackOutput> {
    track: Rc<RefCell<BackgroundTrack<O>>>,
}

impl<O: TrackOutput> BackgroundHandle<O> {
    pub fn new(track: BackgroundTrack<O>) -> Self {
        Self {
            track: Rc::new(RefCell::new(track)),
        }
    }

    pub fn borrow(&self) -> Ref<'_, BackgroundTrack<O>> {
        self.track.borrow()
    }

    /// # Panics
    ///
    /// Panics if the track is already borrowed, e.g. from inside its output.
    pub fn borrow_mut(&self) -> RefMut<'_, BackgroundTrack<O>> {
        self.track.borrow_mut()
    }
}

impl<O: TrackOutput> Clone for BackgroundHandle<O> {
    fn clone(&self) -> Self {
        Self {
            track: Rc::clone(&self.track),
        }
    }
}

impl<O: TrackOutput> BackgroundSignals for BackgroundHandle<O> {
    fn send(&mut self, signal: BackgroundSignal) {
        let mut track = self.track.borrow_mut();
        match signal {
            BackgroundSignal::PauseRequested => track.pause_requested(),
            BackgroundSignal::ResumeRequested => track.resume_requested(),
        }
    }
}
