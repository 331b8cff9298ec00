//! Engine timing configuration.
//!
//! Every suspension point in a round has a configurable delay. The defaults
//! match the animation grace periods the game was tuned with; embedders that
//! drive headless simulations usually zero them out.

use serde::{Deserialize, Serialize};

/// Delays for the engine's scheduled transitions, in seconds.
///
/// All delays are `>= 0`; `0` still defers to the next tick, never runs
/// inline (see `Scheduler`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause between the second pick and pair comparison, covering the
    /// reveal animation.
    pub resolve_delay: f32,

    /// Pause between a mismatch and the pair flipping face-down again.
    pub flip_back_delay: f32,

    /// Pause between the last match and the win announcement.
    pub win_delay: f32,

    /// Pause between a game-start request and the deal.
    pub deal_delay: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolve_delay: 0.15,
            flip_back_delay: 0.3,
            win_delay: 0.2,
            deal_delay: 0.1,
        }
    }
}

impl EngineConfig {
    /// Configuration with every delay at zero, for headless simulation.
    ///
    /// Transitions still take one tick each; they are deferred, not inline.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            resolve_delay: 0.0,
            flip_back_delay: 0.0,
            win_delay: 0.0,
            deal_delay: 0.0,
        }
    }

    /// Set the resolution delay (builder pattern).
    #[must_use]
    pub fn with_resolve_delay(mut self, seconds: f32) -> Self {
        self.resolve_delay = seconds;
        self
    }

    /// Set the mismatch flip-back delay (builder pattern).
    #[must_use]
    pub fn with_flip_back_delay(mut self, seconds: f32) -> Self {
        self.flip_back_delay = seconds;
        self
    }

    /// Set the win announcement delay (builder pattern).
    #[must_use]
    pub fn with_win_delay(mut self, seconds: f32) -> Self {
        self.win_delay = seconds;
        self
    }

    /// Set the deal delay (builder pattern).
    #[must_use]
    pub fn with_deal_delay(mut self, seconds: f32) -> Self {
        self.deal_delay = seconds;
        self
    }
}
