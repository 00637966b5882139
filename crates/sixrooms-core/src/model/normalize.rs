//! Endpoint-pair normalization.
//!
//! Connections are logically unordered but stored as `source`/`target`.
//! Every operation that matches connections by endpoints goes through
//! [`pair_key`], so `(a, b)` and `(b, a)` always compare equal.

/// A sorted, borrowed endpoint pair.
pub type PairKey<'a> = (&'a str, &'a str);

/// A sorted, owned endpoint pair.
pub type OwnedPairKey = (String, String);

/// Sort two endpoints into a canonical key.
#[must_use]
pub fn pair_key<'a>(a: &'a str, b: &'a str) -> PairKey<'a> {
    if a <= b { (a, b) } else { (b, a) }
}

/// Owned variant of [`pair_key`].
#[must_use]
pub fn owned_pair_key(a: &str, b: &str) -> OwnedPairKey {
    let (lo, hi) = pair_key(a, b);
    (lo.to_string(), hi.to_string())
}

/// `true` if `(a, b)` and `(c, d)` name the same unordered pair.
#[must_use]
pub fn same_pair(a: &str, b: &str, c: &str, d: &str) -> bool {
    pair_key(a, b) == pair_key(c, d)
}
