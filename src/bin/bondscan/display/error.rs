use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    if let Some(io_err) = err.downcast_ref::<bondscan::io::Error>() {
        return geometry_hints(io_err);
    }
    if let Some(cache_err) = err.downcast_ref::<bondscan::cache::Error>() {
        return cache_hints(cache_err);
    }
    if err
        .downcast_ref::<bondscan::analysis::CriteriaError>()
        .is_some()
    {
        return vec![
            "--min-length is exclusive and --max-length is inclusive".to_string(),
            "Both bounds must be finite and min must be below max".to_string(),
        ];
    }
    Vec::new()
}

fn geometry_hints(err: &bondscan::io::Error) -> Vec<String> {
    use bondscan::io::Error as IoError;

    match err {
        IoError::NotFound { path } => vec![
            format!("No file exists at '{}'", path.display()),
            "Check the path spelling and working directory".to_string(),
        ],
        IoError::Io { source } => match source.kind() {
            io::ErrorKind::PermissionDenied => vec![
                "Permission denied reading the file".to_string(),
                "Check file permissions with `ls -la`".to_string(),
            ],
            io::ErrorKind::InvalidData => vec![
                "The file is not valid UTF-8 text".to_string(),
                "XYZ files must be plain text".to_string(),
            ],
            _ => vec!["Check that the path points to a readable file".to_string()],
        },
        IoError::Parse { line, .. } => vec![
            format!("Inspect line {} of the file", line),
            "The first 2 lines are a header and are ignored".to_string(),
            "Every following line must read: <symbol> <x> <y> <z>".to_string(),
        ],
        IoError::TooFewAtoms { .. } => vec![
            "At least 2 atom rows are needed to form a pair".to_string(),
            "Check that the header is exactly 2 lines long".to_string(),
        ],
    }
}

fn cache_hints(err: &bondscan::cache::Error) -> Vec<String> {
    use bondscan::cache::Error as CacheError;

    match err {
        CacheError::Io { path, .. } => vec![
            format!("Could not access '{}'", path.display()),
            "Check that the --cache directory is writable".to_string(),
        ],
        CacheError::Decode { path, .. } => vec![
            format!("Delete '{}' to start with an empty cache", path.display()),
            "Cached results are recomputed on demand, nothing is lost".to_string(),
        ],
        CacheError::Encode(_) => vec!["Run again without --cache to skip persistence".to_string()],
    }
}
