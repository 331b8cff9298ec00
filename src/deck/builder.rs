//! Deck assembly.
//!
//! A pure function from (slot count, face pool, rng) to a shuffled
//! assignment of faces to slots. The board decides how many slots exist;
//! this module only guarantees the pairing structure:
//!
//! - exactly two entries share each pair id
//! - pair ids range over `0..total/2`
//! - with fewer faces than pairs, faces repeat as evenly as possible
//!   instead of clustering
//! - neither face order nor board position is predictable from pair order
//!   (the face pool and the final deck are shuffled independently)

use crate::core::GameRng;

use super::entry::{CardEntry, FaceId, PairId};

/// Build a shuffled deck of `total_slots` entries.
///
/// Odd totals are rounded up to the next even count. With an empty face
/// pool, each pair's face is synthesized from its pair index; otherwise
/// faces are drawn from the shuffled pool in a round-robin cycle.
///
/// ## Usage
///
/// ```
/// use pairup::core::GameRng;
/// use pairup::deck::{build_deck, FaceId};
///
/// let mut rng = GameRng::new(42);
/// let deck = build_deck(&mut rng, 4, &[FaceId::new(10), FaceId::new(11)]);
///
/// assert_eq!(deck.len(), 4);
/// ```
#[must_use]
pub fn build_deck(rng: &mut GameRng, total_slots: usize, faces: &[FaceId]) -> Vec<CardEntry> {
    let total = if total_slots % 2 == 1 {
        total_slots + 1
    } else {
        total_slots
    };
    let pair_count = total / 2;

    let pairs = pick_faces_for_pairs(rng, pair_count, faces);

    let mut deck = Vec::with_capacity(total);
    for entry in pairs {
        deck.push(entry);
        deck.push(entry);
    }
    rng.shuffle(&mut deck);
    deck
}

/// One entry per pair, faces spread round-robin over the shuffled pool.
fn pick_faces_for_pairs(rng: &mut GameRng, pair_count: usize, faces: &[FaceId]) -> Vec<CardEntry> {
    if faces.is_empty() {
        return (0..pair_count)
            .map(|i| CardEntry {
                face: FaceId::placeholder(i),
                pair: PairId::new(i as i32),
            })
            .collect();
    }

    let mut pool = faces.to_vec();
    rng.shuffle(&mut pool);

    (0..pair_count)
        .map(|i| CardEntry {
            face: pool[i % pool.len()],
            pair: PairId::new(i as i32),
        })
        .collect()
}
