//! Playback coordinator - wires slots to the background track
//!
//! The songs section ducks the background track; the welcome greeting does
//! not. Both are ordinary [`ForegroundSlot`]s, only their signal sinks differ.

use crate::{
    background::{BackgroundHandle, BackgroundTrack},
    events::PlaybackEvent,
    foreground::ForegroundSlot,
    output::{ClipOutput, TrackOutput},
    signals::NoSignals,
    types::PlaybackConfig,
};

/// Slot name of the songs section
pub const SONGS_SLOT: &str = "songs";

/// Slot name of the welcome greeting
pub const WELCOME_SLOT: &str = "welcome";

pub struct PlaybackCoordinator<C: ClipOutput, T: TrackOutput + 'static> {
    background: BackgroundHandle<T>,
    songs: ForegroundSlot<C>,
    welcome: ForegroundSlot<C>,
}

impl<C: ClipOutput, T: TrackOutput + 'static> PlaybackCoordinator<C, T> {
    /// Build the coordinator; the background track is not started yet
    pub fn new(
        config: &PlaybackConfig,
        background_source: impl Into<String>,
        background_output: T,
        songs_output: C,
        welcome_output: C,
    ) -> Self {
        let background = BackgroundHandle::new(BackgroundTrack::new(
            background_source,
            background_output,
            config,
        ));
        let songs = ForegroundSlot::new(SONGS_SLOT, songs_output, Box::new(background.clone()));
        let welcome = ForegroundSlot::new(WELCOME_SLOT, welcome_output, Box::new(NoSignals));

        Self {
            background,
            songs,
            welcome,
        }
    }

    /// Mount the background player (applies volume, attempts autoplay)
    pub fn start(&mut self) {
        self.background.borrow_mut().start();
    }

    pub fn background(&self) -> &BackgroundHandle<T> {
        &self.background
    }

    pub fn songs(&self) -> &ForegroundSlot<C> {
        &self.songs
    }

    pub fn songs_mut(&mut self) -> &mut ForegroundSlot<C> {
        &mut self.songs
    }

    pub fn welcome(&self) -> &ForegroundSlot<C> {
        &self.welcome
    }

    pub fn welcome_mut(&mut self) -> &mut ForegroundSlot<C> {
        &mut self.welcome
    }

    /// Forward a page click to the background track (autoplay retry)
    pub fn on_user_interaction(&mut self) {
        self.background.borrow_mut().on_user_interaction();
    }

    /// Drain the events of every component, slots first
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        let mut events = self.songs.take_events();
        events.extend(self.welcome.take_events());
        events.extend(self.background.borrow_mut().take_events());
        events
    }
}
