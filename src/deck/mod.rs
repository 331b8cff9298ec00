//! Deck building.
//!
//! Pure assignment of face identities to board slots: pair structure,
//! even face cycling, and double shuffling live here; everything else
//! (slot count, spawning, state) is the board's business.

pub mod builder;
pub mod entry;

pub use builder::build_deck;
pub use entry::{CardEntry, FaceId, PairId};
