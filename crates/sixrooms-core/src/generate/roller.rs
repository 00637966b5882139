//! Weighted connection-type roll.

use rand::Rng;

use crate::model::ConnectionKind;

/// Fixed roll table, in percent. Sums to 100.
pub const CONNECTION_WEIGHTS: [(ConnectionKind, u32); 5] = [
    (ConnectionKind::Open, 45),
    (ConnectionKind::Closed, 22),
    (ConnectionKind::Trapped, 11),
    (ConnectionKind::Hazardous, 11),
    (ConnectionKind::Secret, 11),
];

/// Roll one traversal kind from the fixed distribution.
pub fn roll_connection_kind<R: Rng + ?Sized>(rng: &mut R) -> ConnectionKind {
    let total: u32 = CONNECTION_WEIGHTS.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for &(kind, weight) in &CONNECTION_WEIGHTS {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    ConnectionKind::Open
}
