//! Foreground slot - one user-started clip at a time
//!
//! A slot plays at most one item. Starting an item stops the previous one in
//! the same slot and asks the background track to pause; every transition
//! back to idle asks it to resume. An item that fails to play is disabled for
//! the rest of the session.

use crate::{
    error::{PlaybackError, Result},
    events::{EventQueue, PlaybackEvent},
    output::ClipOutput,
    signals::{BackgroundSignal, BackgroundSignals},
    types::SlotState,
};
use keepsake_core::ItemId;
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub struct ForegroundSlot<O: ClipOutput> {
    name: String,
    state: SlotState,
    unavailable: BTreeSet<ItemId>,
    output: O,
    signals: Box<dyn BackgroundSignals>,
    events: EventQueue,
}

impl<O: ClipOutput> ForegroundSlot<O> {
    pub fn new(name: impl Into<String>, output: O, signals: Box<dyn BackgroundSignals>) -> Self {
        Self {
            name: name.into(),
            state: SlotState::Idle,
            unavailable: BTreeSet::new(),
            output,
            signals,
            events: EventQueue::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    /// The item currently playing, if any
    pub fn playing(&self) -> Option<ItemId> {
        self.state.playing()
    }

    /// Whether the play control for `id` is enabled
    pub fn is_available(&self, id: ItemId) -> bool {
        !self.unavailable.contains(&id)
    }

    pub fn unavailable_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.unavailable.iter().copied()
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

    // ===== User requests =====

    /// Start `id`, stopping whatever else this slot is playing
    ///
    /// No-op if `id` is already playing or is unavailable.
    pub fn request_play(&mut self, id: ItemId) {
        if !self.is_available(id) {
            debug!(slot = %self.name, id = %id, "Ignoring play request for unavailable item");
            return;
        }
        if self.state.is_playing(id) {
            return;
        }

        if let SlotState::Playing(previous) = self.state {
            debug!(slot = %self.name, id = %previous, "Stopping previous item");
            self.output.stop(previous);
        }

        self.signals.send(BackgroundSignal::PauseRequested);
        self.output.start(id);
        self.set_state(SlotState::Playing(id));
    }

    /// Like [`request_play`](Self::request_play), but reports why a request
    /// for an unavailable item was ignored
    pub fn try_play(&mut self, id: ItemId) -> Result<()> {
        if !self.is_available(id) {
            return Err(PlaybackError::ItemUnavailable(id));
        }
        self.request_play(id);
        Ok(())
    }

    /// Pause the playing item, if any
    pub fn pause(&mut self) {
        if let SlotState::Playing(id) = self.state {
            self.output.stop(id);
            self.stop_current();
        }
    }

    /// Play button behaviour: pause `id` if it is playing, otherwise play it
    pub fn toggle(&mut self, id: ItemId) {
        if self.state.is_playing(id) {
            self.pause();
        } else {
            self.request_play(id);
        }
    }

    // ===== Audio facility callbacks =====

    /// The clip for `id` reached its natural end
    pub fn on_ended(&mut self, id: ItemId) {
        if self.state.is_playing(id) {
            debug!(slot = %self.name, id = %id, "Item finished");
            self.stop_current();
        }
    }

    /// The platform rejected the play request for `id`
    pub fn on_play_rejected(&mut self, id: ItemId) {
        warn!(slot = %self.name, id = %id, "Play request rejected");
        self.fail(id);
    }

    /// The audio resource for `id` could not be loaded
    pub fn on_load_error(&mut self, id: ItemId) {
        warn!(slot = %self.name, id = %id, "Audio resource failed to load");
        self.fail(id);
    }

    fn fail(&mut self, id: ItemId) {
        if self.unavailable.insert(id) {
            self.events.push(PlaybackEvent::ItemUnavailable {
                slot: self.name.clone(),
                id,
            });
        }
        if self.state.is_playing(id) {
            self.stop_current();
        }
    }

    fn stop_current(&mut self) {
        self.set_state(SlotState::Idle);
        self.signals.send(BackgroundSignal::ResumeRequested);
    }

    fn set_state(&mut self, state: SlotState) {
        debug!(slot = %self.name, from = ?self.state, to = ?state, "Slot transition");
        self.state = state;
        self.events.push(PlaybackEvent::SlotChanged {
            slot: self.name.clone(),
            state,
        });
    }
}
