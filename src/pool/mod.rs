//! Object pooling.
//!
//! The grid is destroyed and rebuilt wholesale on every resize and restart;
//! pooling recycles the expensive visual instances instead of re-allocating
//! them each time.
//!
//! ## Key Types
//!
//! - `PoolItem`: lifecycle hooks (activate/deactivate) the pool drives
//! - `Pool`: one prototype's recycled instances (active/idle sets)
//! - `PoolRegistry`: prototype identity -> pool, injected at composition

pub mod pool;
pub mod registry;

pub use pool::{Pool, PoolItem};
pub use registry::PoolRegistry;
