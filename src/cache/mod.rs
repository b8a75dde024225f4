//! Value-keyed result caches for the distance function.
//!
//! A cache entry is addressed by the literal bit patterns of the two
//! coordinates that produced it, through [`PairKey`]. There is deliberately
//! no way to build a key from a file name or any other call-site context, so
//! two files that share a name but differ in content can never see each
//! other's results.
//!
//! - [`MemoryCache`] lives for the duration of the process.
//! - [`DiskCache`] additionally loads and persists its entries in a TOML file,
//!   so repeated runs over the same coordinates skip recomputation.

mod disk;
mod error;
mod memory;

pub use disk::DiskCache;
pub use error::Error;
pub use memory::MemoryCache;

/// Exact identity of one coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordKey([u64; 3]);

impl CoordKey {
    pub fn of(position: [f64; 3]) -> Self {
        Self(position.map(f64::to_bits))
    }

    pub fn position(self) -> [f64; 3] {
        self.0.map(f64::from_bits)
    }
}

/// Canonical key for an unordered pair of coordinates.
///
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` are equal, so each
/// unordered pair occupies a single cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    lo: CoordKey,
    hi: CoordKey,
}

impl PairKey {
    pub fn new(a: [f64; 3], b: [f64; 3]) -> Self {
        let (ka, kb) = (CoordKey::of(a), CoordKey::of(b));
        if ka <= kb {
            Self { lo: ka, hi: kb }
        } else {
            Self { lo: kb, hi: ka }
        }
    }

    /// Returns both coordinates in canonical order.
    pub fn positions(&self) -> ([f64; 3], [f64; 3]) {
        (self.lo.position(), self.hi.position())
    }
}

/// Storage seam used by [`Distances`](crate::analysis::Distances).
pub trait DistanceCache {
    fn get(&self, key: &PairKey) -> Option<f64>;

    fn insert(&mut self, key: PairKey, distance: f64);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: DistanceCache + ?Sized> DistanceCache for &mut C {
    fn get(&self, key: &PairKey) -> Option<f64> {
        (**self).get(key)
    }

    fn insert(&mut self, key: PairKey, distance: f64) {
        (**self).insert(key, distance)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_is_order_independent() {
        let a = [0.0, 0.0, 0.96];
        let b = [1.0, -2.0, 3.5];

        assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
    }

    #[test]
    fn pair_key_distinguishes_bit_patterns() {
        let a = [0.0, 0.0, 0.0];
        let signed = [-0.0, 0.0, 0.0];

        assert_ne!(
            PairKey::new(a, [1.0, 0.0, 0.0]),
            PairKey::new(signed, [1.0, 0.0, 0.0])
        );
    }

    #[test]
    fn pair_key_positions_round_trip_exactly() {
        let a = [0.1, 0.2, 0.30000000000000004];
        let b = [-7.25, 1e-300, 6.02e23];
        let (lo, hi) = PairKey::new(a, b).positions();

        let mut got = [lo, hi];
        got.sort_by_key(|p| CoordKey::of(*p));
        let mut want = [a, b];
        want.sort_by_key(|p| CoordKey::of(*p));
        assert_eq!(got, want);
    }

    #[test]
    fn mutable_reference_forwards_to_cache() {
        let mut cache = MemoryCache::new();
        {
            let borrowed = &mut cache;
            borrowed.insert(PairKey::new([0.0; 3], [1.0, 0.0, 0.0]), 1.0);
            assert_eq!(DistanceCache::len(&borrowed), 1);
        }
        assert_eq!(cache.len(), 1);
    }
}
