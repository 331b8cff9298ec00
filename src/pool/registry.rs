//! Prototype-to-pool registry.
//!
//! The registry makes pooling transparent: callers spawn "as if
//! instantiating" by prototype id, without knowing whether reuse occurred.
//! It is an explicitly constructed service owned by the composition root
//! and passed to collaborators - there is no ambient global.
//!
//! Which pool owns an instance is resolved by identity: the instance id
//! carries its prototype, so an id the registry never issued resolves to
//! no pool and despawning it is a no-op.

use rustc_hash::FxHashMap;

use crate::core::{HostId, InstanceId, PrototypeId};

use super::pool::{Pool, PoolItem};

/// Lazy map from prototype identity to its pool.
///
/// ## Usage
///
/// ```
/// use pairup::core::HostId;
/// use pairup::pool::PoolRegistry;
/// use pairup::board::CardSlot;
///
/// let mut registry = PoolRegistry::new();
/// let proto = registry.register(CardSlot::new);
///
/// let id = registry.spawn(proto, HostId::new(0)).unwrap();
/// assert!(registry.get(id).is_some());
///
/// registry.despawn(id);
/// ```
pub struct PoolRegistry<T> {
    pools: FxHashMap<PrototypeId, Pool<T>>,
    next_prototype: u32,
}

impl<T: PoolItem> PoolRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: FxHashMap::default(),
            next_prototype: 0,
        }
    }

    /// Register a prototype and create its (empty) pool.
    ///
    /// Instances themselves are created lazily, on first spawn past the
    /// prewarmed count.
    pub fn register(&mut self, factory: impl FnMut() -> T + 'static) -> PrototypeId {
        let prototype = PrototypeId::new(self.next_prototype);
        self.next_prototype += 1;
        self.pools.insert(prototype, Pool::new(prototype, factory));
        prototype
    }

    /// Take an instance of `prototype` into use, re-homed to `host`.
    ///
    /// Returns `None` (and logs) for an unregistered prototype; absence is
    /// the error signal, nothing panics.
    pub fn spawn(&mut self, prototype: PrototypeId, host: HostId) -> Option<InstanceId> {
        match self.pools.get_mut(&prototype) {
            Some(pool) => Some(pool.spawn(host)),
            None => {
                log::warn!("spawn requested for unregistered {prototype}");
                None
            }
        }
    }

    /// Return an instance to its pool's idle set.
    ///
    /// No-op if the instance was not created through this registry, or is
    /// already idle.
    pub fn despawn(&mut self, id: InstanceId) {
        match self.pools.get_mut(&id.prototype()) {
            Some(pool) => pool.despawn(id),
            None => log::trace!("despawn of unregistered instance {id} ignored"),
        }
    }

    /// Ensure at least `count` instances of `prototype` exist, created idle.
    pub fn prewarm(&mut self, prototype: PrototypeId, count: usize) {
        match self.pools.get_mut(&prototype) {
            Some(pool) => pool.prewarm(count),
            None => log::warn!("prewarm requested for unregistered {prototype}"),
        }
    }

    /// Access an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&T> {
        self.pools.get(&id.prototype())?.get(id)
    }

    /// Mutable access to an instance by id.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut T> {
        self.pools.get_mut(&id.prototype())?.get_mut(id)
    }

    /// The pool serving `prototype`, if registered.
    #[must_use]
    pub fn pool(&self, prototype: PrototypeId) -> Option<&Pool<T>> {
        self.pools.get(&prototype)
    }

    /// Mutable access to the pool serving `prototype`.
    pub fn pool_mut(&mut self, prototype: PrototypeId) -> Option<&mut Pool<T>> {
        self.pools.get_mut(&prototype)
    }

    /// Number of registered prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl<T: PoolItem> Default for PoolRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
