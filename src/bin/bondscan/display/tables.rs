use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use bondscan::{CacheStats, Geometry, analysis::pair_count};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const MAX_ROWS: usize = 12;

pub fn print_geometry_info(geometry: &Geometry) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let unique: std::collections::HashSet<_> =
        geometry.atoms().iter().map(|a| a.symbol.as_str()).collect();

    let mut rows = vec![
        ("Total Atoms", format!("{}", geometry.atom_count())),
        ("Unique Symbols", format!("{}", unique.len())),
        ("Atom Pairs", format!("{}", pair_count(geometry.atom_count()))),
    ];

    if let Some(extent) = extent(geometry) {
        rows.push((
            "Extent",
            format!("{:.2} × {:.2} × {:.2}", extent[0], extent[1], extent[2]),
        ));
    }

    print_kv_table(&mut out, "Geometry Summary", &rows);
}

pub fn print_symbol_distribution(geometry: &Geometry) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for atom in geometry.atoms() {
        *counts.entry(atom.symbol.as_str()).or_insert(0) += 1;
    }

    let total = geometry.atom_count();
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ Symbol Distribution ─┐");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        "Symbol", "Count", "Distribution"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (symbol, count) in sorted.iter().take(MAX_ROWS) {
        let pct = (*count as f64 / total as f64) * 100.0;
        let cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(symbol, name_w),
            count,
            cell
        );
    }

    if sorted.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more symbols)", sorted.len() - MAX_ROWS)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

pub fn print_cache_summary(stats: CacheStats, entries: usize, store: Option<&Path>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let hit_rate = if stats.lookups() == 0 {
        0.0
    } else {
        stats.hits as f64 / stats.lookups() as f64 * 100.0
    };

    let mut rows = vec![
        ("Lookups", format!("{}", stats.lookups())),
        ("Computed", format!("{}", stats.misses)),
        ("Cache Hits", format!("{} ({:.1}%)", stats.hits, hit_rate)),
        ("Stored Entries", format!("{}", entries)),
    ];
    rows.push((
        "Store",
        store
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "memory only".to_string()),
    ));

    print_kv_table(&mut out, "Distance Cache", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{right}",
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Axis-aligned bounding box size of all atom positions.
fn extent(geometry: &Geometry) -> Option<[f64; 3]> {
    let mut positions = geometry.positions();
    let first = positions.next()?;
    let (mut lo, mut hi) = (first, first);
    for p in positions {
        for k in 0..3 {
            lo[k] = lo[k].min(p[k]);
            hi[k] = hi[k].max(p[k]);
        }
    }
    Some([hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]])
}
