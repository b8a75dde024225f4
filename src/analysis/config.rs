use super::bond::BondCriteria;
use super::pairs::PairStrategy;

/// How a loaded geometry is presented to the pair enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// Ordered atoms; duplicate symbols are kept.
    #[default]
    Sequence,
    /// Symbol-keyed mapping; duplicate symbols collapse, last one wins.
    BySymbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub criteria: BondCriteria,
    pub strategies: Vec<PairStrategy>,
    pub representation: Representation,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            criteria: BondCriteria::default(),
            strategies: vec![PairStrategy::default()],
            representation: Representation::default(),
        }
    }
}
