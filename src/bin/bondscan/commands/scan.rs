use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use bondscan::analysis::pair_count;
use bondscan::{
    AnalysisConfig, DiskCache, DistanceCache, Distances, Geometry, MemoryCache, Representation,
    Section, SymbolMap, read_xyz_file, scan, write_report,
};

use crate::cli::Cli;
use crate::config::build_analysis_config;
use crate::display::{
    Context as DisplayContext, ScanProgress, Stage, print_cache_summary, print_geometry_info,
    print_symbol_distribution,
};

/// Runs one scan of `cli.input`, writing bond lines to `out`.
///
/// Nothing reaches `out` unless the geometry loaded and every strategy ran.
pub fn run_scan<W: Write>(cli: &Cli, ctx: DisplayContext, out: &mut W) -> Result<()> {
    let config = build_analysis_config(&cli.analysis)?;

    let mut progress = ctx.progress();

    progress.begin(Stage::Read);
    let geometry = read_xyz_file(&cli.input)
        .with_context(|| format!("Failed to load geometry from '{}'", cli.input.display()))?;
    progress.end(
        Stage::Read,
        &[
            format!("Parse {}", file_label(&cli.input)),
            format!(
                "{} atoms, {} unique pairs",
                geometry.atom_count(),
                pair_count(geometry.atom_count())
            ),
        ],
    );

    if ctx.interactive {
        print_geometry_info(&geometry);
        print_symbol_distribution(&geometry);
    }

    let bonds = match cli.cache.dir.as_deref() {
        Some(dir) => {
            let cache = DiskCache::open(dir).with_context(|| {
                format!("Failed to open distance cache in '{}'", dir.display())
            })?;
            let mut distances = Distances::new(cache);
            let bonds =
                evaluate_and_report(&geometry, &config, &mut distances, &mut progress, out)?;

            let stats = distances.stats();
            let mut cache = distances.into_cache();
            cache.persist().context("Failed to save distance cache")?;
            if ctx.interactive {
                print_cache_summary(stats, cache.len(), Some(cache.path()));
            }
            bonds
        }
        None => {
            let mut distances = Distances::new(MemoryCache::new());
            let bonds =
                evaluate_and_report(&geometry, &config, &mut distances, &mut progress, out)?;
            if ctx.interactive {
                print_cache_summary(distances.stats(), distances.cache().len(), None);
            }
            bonds
        }
    };

    progress.finish(bonds);

    Ok(())
}

fn evaluate_and_report<C: DistanceCache, W: Write>(
    geometry: &Geometry,
    config: &AnalysisConfig,
    distances: &mut Distances<C>,
    progress: &mut ScanProgress,
    out: &mut W,
) -> Result<usize> {
    progress.begin(Stage::Evaluate);

    let symbols;
    let sections = match config.representation {
        Representation::Sequence => scan(geometry.atoms(), config, distances),
        Representation::BySymbol => {
            symbols = SymbolMap::from_geometry(geometry);
            if symbols.collapsed() > 0 {
                log::warn!(
                    "{} atom row(s) repeat an earlier symbol and were collapsed; \
                     only the last coordinate of each symbol is kept",
                    symbols.collapsed()
                );
            }
            scan(symbols.entries(), config, distances)
        }
    };
    progress.end(Stage::Evaluate, &evaluation_notes(&sections, distances));

    progress.begin(Stage::Write);
    progress
        .suspend(|| write_sections(out, &sections))
        .context("Failed to write report")?;

    let bonds: usize = sections.iter().map(|s| s.records.len()).sum();
    progress.end(Stage::Write, &[format!("{bonds} bond line(s) written")]);

    Ok(bonds)
}

fn write_sections<W: Write>(out: &mut W, sections: &[Section<'_>]) -> io::Result<()> {
    let with_headings = sections.len() > 1;
    for section in sections {
        if with_headings {
            writeln!(out, "{}:", section.strategy.label())?;
        }
        write_report(out, &section.records)?;
    }
    out.flush()
}

fn evaluation_notes<C: DistanceCache>(
    sections: &[Section<'_>],
    distances: &Distances<C>,
) -> Vec<String> {
    let stats = distances.stats();
    let mut steps: Vec<String> = sections
        .iter()
        .map(|s| {
            format!(
                "{}: {} pairs, {} bonded",
                s.strategy.label(),
                s.pairs_evaluated,
                s.records.len()
            )
        })
        .collect();
    steps.push(format!(
        "{} distances computed, {} served from cache",
        stats.misses, stats.hits
    ));
    steps
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
