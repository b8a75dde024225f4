use crate::cache::{DistanceCache, MemoryCache, PairKey};

/// Euclidean distance between two points.
///
/// The squared differences are identical for `(a, b)` and `(b, a)`, so the
/// result is exactly symmetric. NaN components propagate to the result.
#[inline]
pub fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Hit and miss counters of a [`Distances`] evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }
}

/// Memoizing distance evaluator over an injected cache.
///
/// Lookups are keyed on the coordinate values alone, through [`PairKey`].
#[derive(Debug, Default)]
pub struct Distances<C = MemoryCache> {
    cache: C,
    stats: CacheStats,
}

impl<C: DistanceCache> Distances<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            stats: CacheStats::default(),
        }
    }

    pub fn distance(&mut self, a: [f64; 3], b: [f64; 3]) -> f64 {
        let key = PairKey::new(a, b);
        if let Some(d) = self.cache.get(&key) {
            self.stats.hits += 1;
            return d;
        }

        let (lo, hi) = key.positions();
        log::debug!("computing distance between {lo:?} and {hi:?}");
        let d = euclidean(lo, hi);
        self.cache.insert(key, d);
        self.stats.misses += 1;
        d
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: [f64; 3] = [0.0, 0.0, 0.0];
    const H1: [f64; 3] = [0.0, 0.0, 0.96];
    const H2: [f64; 3] = [0.0, 0.0, -0.96];

    #[test]
    fn water_distances() {
        assert_eq!(euclidean(O, H1), 0.96);
        assert_eq!(euclidean(O, H2), 0.96);
        assert_eq!(euclidean(H1, H2), 1.92);
    }

    #[test]
    fn symmetric_for_arbitrary_points() {
        let points = [
            [0.1, -2.7, 3.3],
            [1e-8, 5.5, -0.125],
            [-123.456, 0.0, 78.9],
            [3.0, 4.0, 0.0],
        ];
        for &a in &points {
            for &b in &points {
                assert_eq!(euclidean(a, b).to_bits(), euclidean(b, a).to_bits());
            }
        }
    }

    #[test]
    fn self_distance_is_zero() {
        for p in [O, H1, [1.5, -2.5, 1e10]] {
            assert_eq!(euclidean(p, p), 0.0);
        }
    }

    #[test]
    fn pythagorean_triple() {
        assert_eq!(euclidean([0.0, 0.0, 0.0], [3.0, 4.0, 12.0]), 13.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(euclidean([f64::NAN, 0.0, 0.0], O).is_nan());
    }

    #[test]
    fn repeated_inputs_hit_cache() {
        let mut distances = Distances::new(MemoryCache::new());

        let first = distances.distance(O, H1);
        let second = distances.distance(O, H1);

        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(distances.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(distances.cache().len(), 1);
    }

    #[test]
    fn reversed_inputs_share_one_entry() {
        let mut distances = Distances::new(MemoryCache::new());

        let forward = distances.distance(H1, H2);
        let backward = distances.distance(H2, H1);

        assert_eq!(forward.to_bits(), backward.to_bits());
        assert_eq!(distances.stats().misses, 1);
        assert_eq!(distances.stats().hits, 1);
        assert_eq!(distances.into_cache().len(), 1);
    }

    #[test]
    fn identical_values_from_different_sources_hit() {
        let mut distances = Distances::new(MemoryCache::new());
        let from_first_file = [[0.0, 0.0, 0.0], [0.0, 0.0, 0.96]];
        let from_second_file = vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.96]];

        distances.distance(from_first_file[0], from_first_file[1]);
        distances.distance(from_second_file[0], from_second_file[1]);

        assert_eq!(distances.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn preloaded_cache_is_trusted() {
        let mut cache = MemoryCache::new();
        cache.insert(PairKey::new(O, H1), 0.5);
        let mut distances = Distances::new(cache);

        assert_eq!(distances.distance(H1, O), 0.5);
        assert_eq!(distances.stats().misses, 0);
    }

    #[test]
    fn borrowed_cache_outlives_evaluator() {
        let mut cache = MemoryCache::new();
        {
            let mut distances = Distances::new(&mut cache);
            distances.distance(O, H2);
        }
        assert_eq!(cache.len(), 1);
    }
}
