use std::collections::HashMap;

use super::{DistanceCache, PairKey};

#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<PairKey, f64>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries sorted by key, for stable serialization.
    pub fn sorted_entries(&self) -> Vec<(PairKey, f64)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl DistanceCache for MemoryCache {
    fn get(&self, key: &PairKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    fn insert(&mut self, key: PairKey, distance: f64) {
        self.entries.insert(key, distance);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(PairKey, f64)> for MemoryCache {
    fn from_iter<I: IntoIterator<Item = (PairKey, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
