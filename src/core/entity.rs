//! Identity types for pooled objects.
//!
//! Every recycled object is addressed by an `InstanceId`, which carries the
//! `PrototypeId` of the pool that created it. That makes "which pool owns
//! this instance" a direct lookup: an id whose prototype was never
//! registered simply resolves to nothing.
//!
//! ## Usage
//!
//! ```
//! use pairup::core::{InstanceId, PrototypeId};
//!
//! let proto = PrototypeId::new(0);
//! let id = InstanceId::new(proto, 3);
//!
//! assert_eq!(id.prototype(), proto);
//! assert_eq!(id.index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of a pool prototype.
///
/// Prototypes are registered with a `PoolRegistry`; the registry never
/// compares prototypes by value, only by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrototypeId(pub u32);

impl PrototypeId {
    /// Create a new prototype ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PrototypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prototype({})", self.0)
    }
}

/// Unique identifier for one pooled instance.
///
/// The prototype half names the pool; the index half is unique within it.
/// Ids stay valid for the process lifetime - instances are recycled, never
/// destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId {
    prototype: PrototypeId,
    index: u32,
}

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(prototype: PrototypeId, index: u32) -> Self {
        Self { prototype, index }
    }

    /// The prototype (and therefore the pool) this instance belongs to.
    #[must_use]
    pub const fn prototype(self) -> PrototypeId {
        self.prototype
    }

    /// Index within the owning pool.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({}, {})", self.prototype.0, self.index)
    }
}

/// Identifier of a host a spawned instance is re-homed to.
///
/// Hosts are opaque to the pool layer - a grid container, a mixer bus,
/// whatever the embedding application attaches spawned objects to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(pub u32);

impl HostId {
    /// Create a new host ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Host({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_parts() {
        let proto = PrototypeId::new(7);
        let id = InstanceId::new(proto, 42);

        assert_eq!(id.prototype(), proto);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn test_ids_from_different_prototypes_differ() {
        let a = InstanceId::new(PrototypeId::new(0), 1);
        let b = InstanceId::new(PrototypeId::new(1), 1);

        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PrototypeId::new(3)), "Prototype(3)");
        assert_eq!(
            format!("{}", InstanceId::new(PrototypeId::new(3), 9)),
            "Instance(3, 9)"
        );
        assert_eq!(format!("{}", HostId::new(1)), "Host(1)");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId::new(PrototypeId::new(2), 5);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
