mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::{ScanProgress, Stage};
pub use tables::{print_cache_summary, print_geometry_info, print_symbol_distribution};

/// Whether this run decorates stderr with a banner, progress, and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    /// Interactive only when stderr is a terminal and `--quiet` is off.
    pub fn for_run(quiet: bool) -> Self {
        if quiet {
            return Self::silent();
        }
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub const fn silent() -> Self {
        Self { interactive: false }
    }

    pub fn progress(self) -> ScanProgress {
        ScanProgress::new(self.interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_run_is_never_interactive() {
        assert_eq!(Context::for_run(true), Context::silent());
        assert!(!Context::for_run(true).interactive);
    }
}
