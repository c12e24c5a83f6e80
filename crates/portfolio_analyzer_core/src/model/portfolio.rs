use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::render_amount;
use crate::error::AnalysisError;

/// An investment portfolio summarized by the mean and standard deviation of
/// its annual return, both in percent (9.43 means 9.43% per year).
///
/// Construction validates the parameters, so every `Portfolio` in circulation
/// has a finite mean and a non-negative, finite standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PortfolioParams")]
pub struct Portfolio {
    name: String,
    mean_return_rate: f32,
    std_return_rate: f32,
}

/// Unvalidated wire form of a [`Portfolio`]
#[derive(Debug, Clone, Deserialize)]
struct PortfolioParams {
    name: String,
    mean_return_rate: f32,
    std_return_rate: f32,
}

impl TryFrom<PortfolioParams> for Portfolio {
    type Error = AnalysisError;

    fn try_from(params: PortfolioParams) -> Result<Self, Self::Error> {
        Portfolio::new(
            params.name,
            params.mean_return_rate,
            params.std_return_rate,
        )
    }
}

impl Portfolio {
    pub const AGGRESSIVE_MEAN: f32 = 9.4324;
    pub const AGGRESSIVE_STD_DEV: f32 = 15.675;
    pub const VERY_CONSERVATIVE_MEAN: f32 = 6.189;
    pub const VERY_CONSERVATIVE_STD_DEV: f32 = 6.3438;

    pub fn new(
        name: impl Into<String>,
        mean_return_rate: f32,
        std_return_rate: f32,
    ) -> Result<Self, AnalysisError> {
        let portfolio = Self {
            name: name.into(),
            mean_return_rate,
            std_return_rate,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Preset with a high mean and wide spread of annual returns
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            name: "aggressive".to_string(),
            mean_return_rate: Self::AGGRESSIVE_MEAN,
            std_return_rate: Self::AGGRESSIVE_STD_DEV,
        }
    }

    /// Preset with a modest mean and narrow spread of annual returns
    #[must_use]
    pub fn very_conservative() -> Self {
        Self {
            name: "very conservative".to_string(),
            mean_return_rate: Self::VERY_CONSERVATIVE_MEAN,
            std_return_rate: Self::VERY_CONSERVATIVE_STD_DEV,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mean_return_rate(&self) -> f32 {
        self.mean_return_rate
    }

    #[must_use]
    pub fn std_return_rate(&self) -> f32 {
        self.std_return_rate
    }

    /// Check the parameters against the normal sampler's contract.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let reason = if !self.mean_return_rate.is_finite() {
            Some("mean must be finite")
        } else if !self.std_return_rate.is_finite() || self.std_return_rate < 0.0 {
            Some("std_dev must be non-negative and finite")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(AnalysisError::InvalidPortfolioParameters {
                name: self.name.clone(),
                mean: self.mean_return_rate,
                std_dev: self.std_return_rate,
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Portfolio name: {}. Mean return rate: {}. Standard deviation return rate: {}",
            self.name,
            render_amount(self.mean_return_rate),
            render_amount(self.std_return_rate)
        )
    }
}
