//! Deferred-callback scheduling.
//!
//! Every timed step in the engine - reveal grace periods, flip-backs, the
//! win fanfare, voice reclaim - goes through one `Scheduler` advanced once
//! per frame tick. Nothing blocks; control always returns to the caller
//! and the continuation runs on a later tick.

pub mod queue;

pub use queue::Scheduler;
