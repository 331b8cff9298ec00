//! # pairup
//!
//! A pooled, frame-ticked runtime engine for tile-matching memory games:
//! a grid of face-down cards is revealed two at a time, matching pairs
//! lock face-up, mismatches flip back, and the round ends when every pair
//! is found.
//!
//! ## Design Principles
//!
//! 1. **Recycle, never destroy**: the grid is torn down and rebuilt on
//!    every resize and restart, so visual instances are pool-managed for
//!    the process lifetime.
//!
//! 2. **Defer, never block**: every timed step (reveal grace, flip-back,
//!    win fanfare) is a scheduled continuation fired by the frame tick.
//!    There are no threads and no waits.
//!
//! 3. **Inject, never reach**: the pool registry, scheduler, and event
//!    bus are explicit services on a `GameContext` built by the
//!    composition root. Nothing in the crate touches a global.
//!
//! ## Architecture
//!
//! - **Single-threaded cooperative model**: `tick` is the only mutation
//!   point; continuations fired in one pass never run inside it.
//!
//! - **Round generations**: the scheduler has no cancellation, so board
//!   continuations carry the generation of the round that scheduled them
//!   and are dropped if the board was rebuilt in the interim.
//!
//! ## Modules
//!
//! - `core`: identities, RNG, timing configuration, continuations
//! - `pool`: object pools and the prototype registry
//! - `scheduler`: the virtual-clock deferred queue
//! - `events`: presentation events and the publish/subscribe bus
//! - `deck`: pair/face assignment for a deal
//! - `board`: card slots, the shared context, the match state machine
//! - `grid`: clamped grid sizing and cell math
//! - `audio`: headless sound bookkeeping over pooled voices
//! - `game`: the `GameSession` composition root

pub mod audio;
pub mod board;
pub mod core;
pub mod deck;
pub mod events;
pub mod game;
pub mod grid;
pub mod pool;
pub mod scheduler;

// Re-export commonly used types
pub use crate::core::{
    format_elapsed, Continuation, EngineConfig, GameRng, HostId, InstanceId, PrototypeId,
    RoundTimer,
};

pub use crate::pool::{Pool, PoolItem, PoolRegistry};

pub use crate::scheduler::Scheduler;

pub use crate::events::{EventBus, GameEvent, ListenerId};

pub use crate::deck::{build_deck, CardEntry, FaceId, PairId};

pub use crate::board::{CardSlot, EnginePhase, GameContext, MatchEngine};

pub use crate::grid::GridSize;

pub use crate::audio::AudioDirector;

pub use crate::game::GameSession;
