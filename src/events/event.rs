//! Presentation events.
//!
//! Fire-and-forget notifications the UI layer renders from: sounds, screen
//! switches, the running timer readout. Listeners never return values and
//! never influence the round.

use serde::{Deserialize, Serialize};

use crate::core::InstanceId;

/// A notification published on the [`EventBus`](super::EventBus).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was requested; the deal follows shortly.
    GameStart,

    /// The session returned to the menu state.
    GameReset,

    /// Two selected slots shared a pair id and are now locked.
    Match {
        /// First slot of the matched pair.
        first: InstanceId,
        /// Second slot of the matched pair.
        second: InstanceId,
    },

    /// Two selected slots did not share a pair id; both will flip back.
    Mismatch {
        /// First slot of the mismatched pair.
        first: InstanceId,
        /// Second slot of the mismatched pair.
        second: InstanceId,
    },

    /// Every pair is matched.
    Win {
        /// Final elapsed seconds, captured when the timer stopped.
        elapsed: f32,
    },

    /// Per-tick timer readout.
    TimerTick {
        /// Elapsed seconds so far this round.
        elapsed: f32,
    },
}
