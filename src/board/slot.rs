//! Card slot state.
//!
//! One visual position on the grid, holding one card's state. The slot is
//! pool-managed: the pool drives `activate`/`deactivate`, the board drives
//! `reset_for_reuse`/`on_despawn` around them, and the presentation layer
//! mirrors `face_up`/`matched` into whatever flip animation it runs.
//!
//! Invariant: a matched slot is done interacting. It never flips back
//! face-down and never produces another pick.

use serde::{Deserialize, Serialize};

use crate::core::HostId;
use crate::deck::{FaceId, PairId};
use crate::pool::PoolItem;

/// A poolable, resettable card slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    face: FaceId,
    pair: PairId,
    face_up: bool,
    matched: bool,
    live: bool,
    host: Option<HostId>,
}

impl CardSlot {
    /// Create an undealt slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            face: FaceId::new(0),
            pair: PairId::UNASSIGNED,
            face_up: false,
            matched: false,
            live: false,
            host: None,
        }
    }

    /// Deal this slot: assign its face and pair, face-down and unmatched.
    pub fn setup(&mut self, face: FaceId, pair: PairId) {
        self.face = face;
        self.pair = pair;
        self.face_up = false;
        self.matched = false;
    }

    /// Turn the slot face-up.
    ///
    /// Returns whether anything changed; matched or already-revealed slots
    /// stay as they are.
    pub fn reveal(&mut self) -> bool {
        if self.matched || self.face_up {
            return false;
        }
        self.face_up = true;
        true
    }

    /// Turn the slot face-down.
    ///
    /// Returns whether anything changed; matched slots never go back
    /// face-down.
    pub fn conceal(&mut self) -> bool {
        if self.matched || !self.face_up {
            return false;
        }
        self.face_up = false;
        true
    }

    /// Lock or unlock the slot as matched.
    pub fn set_matched(&mut self, matched: bool) {
        self.matched = matched;
    }

    /// Would a pick on this slot be valid right now?
    ///
    /// The pick source gates here, so matched or already-revealed slots
    /// never reach the engine. (The engine tolerates them anyway.)
    #[must_use]
    pub const fn try_pick(&self) -> bool {
        !self.matched && !self.face_up
    }

    /// Pool-reuse hook: back to the undealt state.
    pub fn reset_for_reuse(&mut self) {
        self.face_up = false;
        self.matched = false;
        self.pair = PairId::UNASSIGNED;
    }

    /// Hook called just before the board despawns this slot.
    pub fn on_despawn(&mut self) {}

    /// Face shown when revealed.
    #[must_use]
    pub const fn face(&self) -> FaceId {
        self.face
    }

    /// Pair this slot belongs to.
    #[must_use]
    pub const fn pair(&self) -> PairId {
        self.pair
    }

    /// Is the slot currently revealed?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Is the slot locked as matched?
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Is the slot spawned (live on some host)?
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live
    }

    /// The host this slot is attached to while live.
    #[must_use]
    pub const fn host(&self) -> Option<HostId> {
        self.host
    }
}

impl Default for CardSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolItem for CardSlot {
    fn activate(&mut self, host: HostId) {
        self.live = true;
        self.host = Some(host);
    }

    fn deactivate(&mut self) {
        self.live = false;
        self.host = None;
    }
}
