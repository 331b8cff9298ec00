//! The board: slots, shared context, and the match state machine.
//!
//! ## Key Types
//!
//! - `CardSlot`: one grid position's card state (poolable, resettable)
//! - `GameContext`: rng + scheduler + event bus + slot pools, injected
//! - `MatchEngine`: the pick -> reveal -> compare -> resolve state machine
//! - `EnginePhase`: where a round currently is

pub mod context;
pub mod engine;
pub mod slot;

pub use context::GameContext;
pub use engine::{EnginePhase, MatchEngine};
pub use slot::CardSlot;
