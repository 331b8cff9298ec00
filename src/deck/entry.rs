//! Deck entry types.

use serde::{Deserialize, Serialize};

/// Opaque face identity assigned to a slot.
///
/// The engine never interprets faces - they index into whatever art the
/// presentation layer supplies. When no face pool is supplied, placeholder
/// faces are synthesized from the pair index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Synthesized face for pair `index` when no face pool exists.
    #[must_use]
    pub const fn placeholder(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Identity of the pair a slot belongs to.
///
/// Exactly two dealt slots share each pair id. `UNASSIGNED` marks a slot
/// that is pooled but not part of the current deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub i32);

impl PairId {
    /// Pooled-but-not-dealt marker.
    pub const UNASSIGNED: Self = Self(-1);

    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Is this a dealt pair id (not `UNASSIGNED`)?
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 >= 0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// One slot's assignment in a dealt deck: which face it shows and which
/// pair it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Face shown when the slot is revealed.
    pub face: FaceId,
    /// Pair this slot belongs to.
    pub pair: PairId,
}
