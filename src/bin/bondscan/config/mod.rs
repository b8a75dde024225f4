use anyhow::{Context, Result};

use bondscan::{AnalysisConfig, BondCriteria, PairStrategy, Representation};

use crate::cli::{AnalysisOptions, StrategyChoice};

pub fn build_analysis_config(opts: &AnalysisOptions) -> Result<AnalysisConfig> {
    let criteria = BondCriteria::new(opts.min_length, opts.max_length)
        .context("Invalid bond length window")?;

    Ok(AnalysisConfig {
        criteria,
        strategies: build_strategies(opts.strategy),
        representation: if opts.by_symbol {
            Representation::BySymbol
        } else {
            Representation::Sequence
        },
    })
}

fn build_strategies(choice: StrategyChoice) -> Vec<PairStrategy> {
    match choice {
        StrategyChoice::Nested => vec![PairStrategy::NestedLoops],
        StrategyChoice::Generator => vec![PairStrategy::Generator],
        StrategyChoice::Combinations => vec![PairStrategy::Combinations],
        StrategyChoice::All => PairStrategy::ALL.to_vec(),
    }
}
