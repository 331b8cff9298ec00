//! Scheduled continuations.
//!
//! Multi-step sequences (reveal -> compare -> resolve, win fanfare, voice
//! reclaim) never block: each suspension point is expressed as a
//! `Continuation` value queued on the shared `Scheduler`, carrying only the
//! minimal state the step needs. The tick driver dispatches fired
//! continuations back to the component that scheduled them.
//!
//! Board continuations carry the `round` generation that scheduled them.
//! A continuation that outlives its round - the board was rebuilt while it
//! sat in the queue - is dropped on arrival instead of acting on slots that
//! have since been recycled.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;

/// One deferred state-machine step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Continuation {
    /// Deal a fresh board.
    Deal,

    /// Compare the two selected slots.
    Resolve {
        /// Round generation that scheduled the comparison.
        round: u64,
    },

    /// Flip a mismatched pair face-down again.
    FlipBack {
        /// Round generation that scheduled the flip-back.
        round: u64,
        /// First slot of the mismatched pair.
        first: InstanceId,
        /// Second slot of the mismatched pair.
        second: InstanceId,
    },

    /// Raise the win notification.
    AnnounceWin {
        /// Round generation that was completed.
        round: u64,
        /// Elapsed seconds at the moment the timer stopped.
        elapsed: f32,
    },

    /// Return a finished audio voice to its pool.
    ReclaimVoice {
        /// The voice to reclaim.
        voice: InstanceId,
    },
}

impl Continuation {
    /// The round generation this continuation is bound to, if any.
    ///
    /// `Deal` and `ReclaimVoice` are not tied to a round.
    #[must_use]
    pub fn round(&self) -> Option<u64> {
        match self {
            Self::Resolve { round }
            | Self::FlipBack { round, .. }
            | Self::AnnounceWin { round, .. } => Some(*round),
            Self::Deal | Self::ReclaimVoice { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrototypeId;

    #[test]
    fn test_round_binding() {
        assert_eq!(Continuation::Deal.round(), None);
        assert_eq!(Continuation::Resolve { round: 3 }.round(), Some(3));

        let slot = InstanceId::new(PrototypeId::new(0), 0);
        assert_eq!(
            Continuation::FlipBack {
                round: 5,
                first: slot,
                second: slot,
            }
            .round(),
            Some(5)
        );
        assert_eq!(
            Continuation::AnnounceWin {
                round: 2,
                elapsed: 10.0,
            }
            .round(),
            Some(2)
        );
        assert_eq!(Continuation::ReclaimVoice { voice: slot }.round(), None);
    }
}
