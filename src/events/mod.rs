//! Presentation event system.
//!
//! The board raises fire-and-forget notifications - match, mismatch, win,
//! timer readouts - and UI-layer collaborators render them. Dispatch goes
//! through an explicit `EventBus` owned by the game context.

pub mod bus;
pub mod event;

pub use bus::{EventBus, ListenerId};
pub use event::GameEvent;
