use std::fmt;

/// Errors raised while validating inputs to an analysis run
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Too few simulations for the percentile indices to land inside the sample
    InvalidSampleSize {
        num_simulations: usize,
        reason: &'static str,
    },
    /// Return distribution parameters the normal sampler cannot accept
    InvalidPortfolioParameters {
        name: String,
        mean: f32,
        std_dev: f32,
        reason: &'static str,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidSampleSize {
                num_simulations,
                reason,
            } => write!(f, "invalid sample size {num_simulations}: {reason}"),
            AnalysisError::InvalidPortfolioParameters {
                name,
                mean,
                std_dev,
                reason,
            } => write!(
                f,
                "invalid parameters for portfolio {name:?} (mean={mean}, std_dev={std_dev}): {reason}"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

pub type Result<T> = std::result::Result<T, AnalysisError>;
