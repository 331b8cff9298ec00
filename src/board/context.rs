//! Shared per-game services.
//!
//! Everything with process-wide lifetime lives here, explicitly constructed
//! by the composition root and passed by reference - no component reaches
//! for a global. Single mutator by construction: the tick-driving thread.

use crate::board::slot::CardSlot;
use crate::core::{Continuation, GameRng};
use crate::events::EventBus;
use crate::pool::PoolRegistry;
use crate::scheduler::Scheduler;

/// The services a round runs against.
pub struct GameContext {
    /// Random source for deals. Tests pin the seed.
    pub rng: GameRng,
    /// The shared deferred-step queue, advanced once per frame.
    pub scheduler: Scheduler<Continuation>,
    /// Presentation event dispatch.
    pub events: EventBus,
    /// Pooled card slots.
    pub slots: PoolRegistry<CardSlot>,
}

impl GameContext {
    /// Create a context around the given random source.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            scheduler: Scheduler::new(),
            events: EventBus::new(),
            slots: PoolRegistry::new(),
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}
