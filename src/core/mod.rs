//! Core engine types: identities, RNG, timing configuration, continuations.
//!
//! This module contains the fundamental building blocks shared by every
//! subsystem. Nothing here knows about cards or grids.

pub mod config;
pub mod continuation;
pub mod entity;
pub mod rng;
pub mod timer;

pub use config::EngineConfig;
pub use continuation::Continuation;
pub use entity::{HostId, InstanceId, PrototypeId};
pub use rng::GameRng;
pub use timer::{format_elapsed, RoundTimer};
