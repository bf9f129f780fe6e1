//! Property-based tests for foreground slots
//!
//! Uses proptest to verify signal balance and availability invariants across
//! random sequences of user requests and platform callbacks.

use keepsake_core::ItemId;
use keepsake_playback::{
    BackgroundSignal, ClipOutput, ForegroundSlot, SignalLog, SlotState,
};
use proptest::prelude::*;
use std::collections::HashSet;

// ===== Helpers =====

struct NullClips;

impl ClipOutput for NullClips {
    fn start(&mut self, _id: ItemId) {}
    fn stop(&mut self, _id: ItemId) {}
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Play(u32),
    Toggle(u32),
    Pause,
    Ended(u32),
    Rejected(u32),
    LoadError(u32),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1u32..6).prop_map(Op::Play),
        3 => (1u32..6).prop_map(Op::Toggle),
        2 => Just(Op::Pause),
        2 => (1u32..6).prop_map(Op::Ended),
        1 => (1u32..6).prop_map(Op::Rejected),
        1 => (1u32..6).prop_map(Op::LoadError),
    ]
}

fn id(n: u32) -> ItemId {
    ItemId::new(n).unwrap()
}

fn apply(slot: &mut ForegroundSlot<NullClips>, op: Op) {
    match op {
        Op::Play(n) => slot.request_play(id(n)),
        Op::Toggle(n) => slot.toggle(id(n)),
        Op::Pause => slot.pause(),
        Op::Ended(n) => slot.on_ended(id(n)),
        Op::Rejected(n) => slot.on_play_rejected(id(n)),
        Op::LoadError(n) => slot.on_load_error(id(n)),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: background is paused exactly while the slot is playing
    #[test]
    fn signals_balance_with_slot_state(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let log = SignalLog::new();
        let mut slot = ForegroundSlot::new("songs", NullClips, Box::new(log.clone()));

        for op in ops {
            apply(&mut slot, op);

            let pauses = log.count(BackgroundSignal::PauseRequested);
            let resumes = log.count(BackgroundSignal::ResumeRequested);
            prop_assert!(pauses >= resumes);

            // Switching items emits an extra pause without a resume, so only
            // the first pause of each playing stretch counts.
            let mut paused = false;
            for signal in log.signals() {
                match signal {
                    BackgroundSignal::PauseRequested => paused = true,
                    BackgroundSignal::ResumeRequested => {
                        prop_assert!(paused, "resume without preceding pause");
                        paused = false;
                    }
                }
            }
            prop_assert_eq!(paused, slot.state() != SlotState::Idle);
        }
    }

    /// Property: a failed item never plays again
    #[test]
    fn failed_items_never_play_again(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let log = SignalLog::new();
        let mut slot = ForegroundSlot::new("songs", NullClips, Box::new(log));
        let mut failed = HashSet::new();

        for op in ops {
            apply(&mut slot, op);
            if let Op::Rejected(n) | Op::LoadError(n) = op {
                failed.insert(id(n));
            }

            if let Some(playing) = slot.playing() {
                prop_assert!(!failed.contains(&playing));
            }
            for n in &failed {
                prop_assert!(!slot.is_available(*n));
            }
        }
    }
}
