use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: f64 = 0.0;
pub const DEFAULT_MAX_LENGTH: f64 = 1.5;

/// Returns `true` when `min_length < distance <= max_length`.
#[inline]
pub fn is_bond(distance: f64, min_length: f64, max_length: f64) -> bool {
    min_length < distance && distance <= max_length
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("bond length bounds must be finite (got min {min}, max {max})")]
    NonFinite { min: f64, max: f64 },

    #[error("minimum bond length {min} must be smaller than maximum {max}")]
    EmptyRange { min: f64, max: f64 },
}

/// Half-open distance window `(min_length, max_length]` defining a bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCriteria {
    pub min_length: f64,
    pub max_length: f64,
}

impl BondCriteria {
    pub fn new(min_length: f64, max_length: f64) -> Result<Self, CriteriaError> {
        if !min_length.is_finite() || !max_length.is_finite() {
            return Err(CriteriaError::NonFinite {
                min: min_length,
                max: max_length,
            });
        }
        if min_length >= max_length {
            return Err(CriteriaError::EmptyRange {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        is_bond(distance, self.min_length, self.max_length)
    }
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
