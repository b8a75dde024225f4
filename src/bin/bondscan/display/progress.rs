use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// The stages of one scan, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Evaluate,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Read, Stage::Evaluate, Stage::Write];

    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Read => "Reading geometry",
            Stage::Evaluate => "Evaluating pairs",
            Stage::Write => "Writing report",
        }
    }

    fn counter(self) -> String {
        format!("{}/{}", self.ordinal(), Self::ALL.len())
    }
}

/// Stage-by-stage progress of a scan on stderr.
///
/// A hidden progress accepts every call and prints nothing.
pub struct ScanProgress {
    live: Option<Live>,
}

struct Live {
    spinner: Option<ProgressBar>,
    run_started: Instant,
    stage_started: Instant,
}

impl Live {
    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for Live {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

impl ScanProgress {
    pub fn new(interactive: bool) -> Self {
        if !interactive {
            return Self::hidden();
        }
        let now = Instant::now();
        Self {
            live: Some(Live {
                spinner: None,
                run_started: now,
                stage_started: now,
            }),
        }
    }

    pub fn hidden() -> Self {
        Self { live: None }
    }

    pub fn begin(&mut self, stage: Stage) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear_spinner();
        live.stage_started = Instant::now();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {prefix:.dim} {msg}") {
            spinner.set_style(style.tick_chars("◐◓◑◒✓"));
        }
        spinner.set_prefix(stage.counter());
        spinner.set_message(format!("{}...", stage.title()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        live.spinner = Some(spinner);
    }

    /// Closes `stage` and lists `notes` beneath its line.
    pub fn end(&mut self, stage: Stage, notes: &[String]) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear_spinner();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m \x1b[2m{}\x1b[0m {:<36} {:>8}",
            stage.counter(),
            stage.title(),
            seconds(live.stage_started.elapsed())
        );
        for note in notes {
            let _ = writeln!(stderr, "        \x1b[2m→\x1b[0m {note}");
        }
    }

    /// Runs `f` with the spinner hidden, so stdout writes stay clean.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match self.live.as_ref().and_then(|live| live.spinner.as_ref()) {
            Some(spinner) => spinner.suspend(f),
            None => f(),
        }
    }

    pub fn finish(mut self, bonds: usize) {
        let Some(mut live) = self.live.take() else {
            return;
        };
        live.clear_spinner();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<40} {:>8}",
            format!("{bonds} bonded pair(s) reported"),
            seconds(live.run_started.elapsed())
        );
        let _ = writeln!(stderr);
    }
}

fn seconds(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_count_up_to_three() {
        let counters: Vec<String> = Stage::ALL.iter().map(|s| s.counter()).collect();
        assert_eq!(counters, ["1/3", "2/3", "3/3"]);
        assert_eq!(Stage::Evaluate.title(), "Evaluating pairs");
    }

    #[test]
    fn hidden_progress_still_runs_suspended_work() {
        let mut progress = ScanProgress::new(false);
        assert!(progress.live.is_none());

        progress.begin(Stage::Read);
        progress.end(Stage::Read, &["ignored".to_string()]);
        assert_eq!(progress.suspend(|| 7), 7);
        progress.finish(0);
    }

    #[test]
    fn seconds_use_millisecond_precision() {
        assert_eq!(seconds(Duration::from_millis(1250)), "1.250s");
    }
}
