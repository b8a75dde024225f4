//! Pairwise interatomic distances and naive bond detection for XYZ geometry files.
//!
//! Every unordered pair of atoms is measured, and pairs whose distance falls
//! in the window `(min_length, max_length]` (by default `(0, 1.5]`) are
//! reported as bonded. Distance evaluations are memoized in a cache keyed
//! purely by coordinate values.
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use bondscan::{BondCriteria, Distances, MemoryCache, PairStrategy, analyze, read_xyz};
//!
//! let text = "3\nwater\nO 0.0 0.0 0.0\nH 0.0 0.0 0.96\nH 0.0 0.0 -0.96\n";
//! let geometry = read_xyz(Cursor::new(text))?;
//!
//! let mut distances = Distances::new(MemoryCache::new());
//! let bonds = analyze(
//!     geometry.atoms(),
//!     PairStrategy::NestedLoops,
//!     &BondCriteria::default(),
//!     &mut distances,
//! );
//!
//! let lines: Vec<String> = bonds.iter().map(|b| b.to_string()).collect();
//! assert_eq!(lines, ["O to H : 0.960", "O to H : 0.960"]);
//! # Ok::<(), bondscan::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — XYZ geometry loading
//! - [`analysis`] — Distance function, bond predicate, pair enumeration, reporting
//! - [`cache`] — In-memory and on-disk distance caches
//!
//! # Data Types
//!
//! - [`Atom`] — Symbol with Cartesian coordinates
//! - [`Geometry`] — Atoms in file order, duplicates preserved
//! - [`SymbolMap`] — Symbol-keyed view, duplicates collapsed (last wins)
//! - [`BondRecord`] — One bonded pair as reported
//! - [`PairKey`] — Canonical, value-only cache key for a pair of coordinates

mod model;

pub mod analysis;
pub mod cache;
pub mod io;

pub use model::atom::Atom;
pub use model::geometry::{Geometry, SymbolMap};

pub use analysis::{
    AnalysisConfig, BondCriteria, BondRecord, CacheStats, Distances, PairStrategy,
    Representation, Section, analyze, euclidean, is_bond, scan, write_report,
};
pub use cache::{DiskCache, DistanceCache, MemoryCache, PairKey};
pub use io::{read_xyz, read_xyz_file};
