//! Distance evaluation, bond detection, and reporting.
//!
//! The pipeline for one geometry is: enumerate every unordered pair of
//! sites with a [`PairStrategy`], evaluate its distance through the
//! memoizing [`Distances`] evaluator, keep the pairs accepted by
//! [`BondCriteria`], and format them as [`BondRecord`] lines.
//!
//! All records of a run are collected before anything is written, so a
//! caller never emits a partial report.

mod bond;
mod config;
mod distance;
mod pairs;
mod report;

pub use bond::{BondCriteria, CriteriaError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, is_bond};
pub use config::{AnalysisConfig, Representation};
pub use distance::{CacheStats, Distances, euclidean};
pub use pairs::{
    Combinations, PairStrategy, ParseStrategyError, combinations, generator, nested_loops,
    pair_count,
};
pub use report::{BondRecord, write_report};

use crate::cache::DistanceCache;
use crate::model::atom::Atom;

/// Anything that has a symbol and a position.
pub trait Site {
    fn symbol(&self) -> &str;
    fn position(&self) -> [f64; 3];
}

impl Site for Atom {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn position(&self) -> [f64; 3] {
        self.position
    }
}

impl Site for (String, [f64; 3]) {
    fn symbol(&self) -> &str {
        &self.0
    }

    fn position(&self) -> [f64; 3] {
        self.1
    }
}

/// Bonded pairs found by one enumeration strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub strategy: PairStrategy,
    pub pairs_evaluated: usize,
    pub records: Vec<BondRecord<'a>>,
}

/// Finds every bonded pair among `sites` using one strategy.
pub fn analyze<'a, S: Site, C: DistanceCache>(
    sites: &'a [S],
    strategy: PairStrategy,
    criteria: &BondCriteria,
    distances: &mut Distances<C>,
) -> Vec<BondRecord<'a>> {
    let n = sites.len();
    let pairs: Box<dyn Iterator<Item = (usize, usize)> + 'a> = match strategy {
        PairStrategy::NestedLoops => Box::new(nested_loops(n).into_iter()),
        PairStrategy::Generator => Box::new(generator(n)),
        PairStrategy::Combinations => {
            Box::new(combinations(sites).map(|((i, _), (j, _))| (i, j)))
        }
    };

    pairs
        .filter_map(|(i, j)| {
            let (a, b) = (&sites[i], &sites[j]);
            let distance = distances.distance(a.position(), b.position());
            criteria.contains(distance).then(|| BondRecord {
                first: a.symbol(),
                second: b.symbol(),
                indices: (i, j),
                distance,
            })
        })
        .collect()
}

/// Runs every strategy in `config`, in order, over the same sites.
pub fn scan<'a, S: Site, C: DistanceCache>(
    sites: &'a [S],
    config: &AnalysisConfig,
    distances: &mut Distances<C>,
) -> Vec<Section<'a>> {
    config
        .strategies
        .iter()
        .map(|&strategy| Section {
            strategy,
            pairs_evaluated: pair_count(sites.len()),
            records: analyze(sites, strategy, &config.criteria, distances),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::model::geometry::{Geometry, SymbolMap};

    fn water() -> Geometry {
        Geometry::new(vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.0, 0.0, 0.96]),
            Atom::new("H", [0.0, 0.0, -0.96]),
        ])
    }

    fn render(records: &[BondRecord<'_>]) -> Vec<String> {
        records.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn water_reports_two_oh_bonds() {
        let geometry = water();
        let mut distances = Distances::new(MemoryCache::new());

        for strategy in PairStrategy::ALL {
            let records = analyze(
                geometry.atoms(),
                strategy,
                &BondCriteria::default(),
                &mut distances,
            );
            assert_eq!(render(&records), vec!["O to H : 0.960", "O to H : 0.960"]);
            assert_eq!(records[0].indices, (0, 1));
            assert_eq!(records[1].indices, (0, 2));
        }
    }

    #[test]
    fn repeated_strategies_reuse_cache() {
        let geometry = water();
        let mut distances = Distances::new(MemoryCache::new());
        let config = AnalysisConfig {
            strategies: PairStrategy::ALL.to_vec(),
            ..AnalysisConfig::default()
        };

        let sections = scan(geometry.atoms(), &config, &mut distances);

        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.records.len() == 2));
        assert!(sections.iter().all(|s| s.pairs_evaluated == 3));
        assert_eq!(distances.stats(), CacheStats { hits: 6, misses: 3 });
    }

    #[test]
    fn symbol_map_loses_duplicate_hydrogen() {
        let map = SymbolMap::from_geometry(&water());
        let mut distances = Distances::new(MemoryCache::new());

        let records = analyze(
            map.entries(),
            PairStrategy::Combinations,
            &BondCriteria::default(),
            &mut distances,
        );

        assert_eq!(render(&records), vec!["O to H : 0.960"]);
    }

    #[test]
    fn wider_window_includes_hh() {
        let geometry = water();
        let mut distances = Distances::new(MemoryCache::new());
        let criteria = BondCriteria::new(0.0, 2.0).unwrap();

        let records = analyze(
            geometry.atoms(),
            PairStrategy::NestedLoops,
            &criteria,
            &mut distances,
        );

        assert_eq!(
            render(&records),
            vec!["O to H : 0.960", "O to H : 0.960", "H to H : 1.920"]
        );
    }

    #[test]
    fn empty_and_single_atom_inputs_report_nothing() {
        let mut distances = Distances::new(MemoryCache::new());
        let lone = [Atom::new("He", [0.0, 0.0, 0.0])];

        for strategy in PairStrategy::ALL {
            let none: &[Atom] = &[];
            assert!(analyze(none, strategy, &BondCriteria::default(), &mut distances).is_empty());
            assert!(analyze(&lone, strategy, &BondCriteria::default(), &mut distances).is_empty());
        }
        assert_eq!(distances.stats().lookups(), 0);

        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn coincident_atoms_are_not_bonded() {
        let sites = [
            Atom::new("C", [1.0, 1.0, 1.0]),
            Atom::new("C", [1.0, 1.0, 1.0]),
        ];
        let mut distances = Distances::new(MemoryCache::new());

        let records = analyze(
            &sites,
            PairStrategy::Generator,
            &BondCriteria::default(),
            &mut distances,
        );
        assert!(records.is_empty());
    }
}
