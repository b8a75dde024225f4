use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bondscan",
    about = "Report bonded atom pairs in an XYZ geometry file",
    long_about = "Analyzes a user-given XYZ file and outputs the length of every bond, \
                  where a bond is any atom pair closer than the maximum bond length.",
    version,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// XYZ file to analyze
    #[arg(value_name = "XYZ_FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub cache: CacheOptions,

    /// Suppress banner, progress, and summaries (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Analysis")]
pub struct AnalysisOptions {
    /// Pair enumeration strategy; `all` prints every strategy in turn
    #[arg(long, value_name = "STRATEGY", default_value = "nested")]
    pub strategy: StrategyChoice,

    /// Key atoms by symbol (duplicate symbols collapse, last one wins)
    #[arg(long)]
    pub by_symbol: bool,

    /// Exclusive lower bound on bond length
    #[arg(
        long = "min-length",
        value_name = "LEN",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub min_length: f64,

    /// Inclusive upper bound on bond length
    #[arg(
        long = "max-length",
        value_name = "LEN",
        default_value = "1.5",
        allow_hyphen_values = true
    )]
    pub max_length: f64,
}

#[derive(Args)]
#[command(next_help_heading = "Caching")]
pub struct CacheOptions {
    /// Persist computed distances in DIR and reuse them across runs
    #[arg(long = "cache", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum StrategyChoice {
    /// Double loop over all index pairs with an i < j guard
    #[default]
    #[value(alias = "nested-loops")]
    Nested,
    /// Lazily generated index pairs, filtered to i < j
    Generator,
    /// Combinations of two (index, atom) entries
    Combinations,
    /// Every strategy above, one section each
    All,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_file_only() {
        let cli = Cli::try_parse_from(["bondscan", "water.xyz"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("water.xyz"));
        assert_eq!(cli.analysis.strategy, StrategyChoice::Nested);
        assert!(!cli.analysis.by_symbol);
        assert_eq!(cli.analysis.min_length, 0.0);
        assert_eq!(cli.analysis.max_length, 1.5);
        assert!(cli.cache.dir.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["bondscan"]).is_err());
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "bondscan",
            "--strategy",
            "all",
            "--by-symbol",
            "--min-length",
            "-1",
            "--max-length",
            "2.2",
            "--cache",
            "cache",
            "-q",
            "benzene.xyz",
        ])
        .unwrap();

        assert_eq!(cli.analysis.strategy, StrategyChoice::All);
        assert!(cli.analysis.by_symbol);
        assert_eq!(cli.analysis.min_length, -1.0);
        assert_eq!(cli.analysis.max_length, 2.2);
        assert_eq!(cli.cache.dir, Some(PathBuf::from("cache")));
        assert!(cli.quiet);
    }

    #[test]
    fn negative_max_length_reaches_validation() {
        let cli = Cli::try_parse_from(["bondscan", "--max-length", "-1", "water.xyz"]).unwrap();

        assert_eq!(cli.analysis.max_length, -1.0);
    }
}
