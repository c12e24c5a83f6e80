//! Scenario configuration
//!
//! A [`Scenario`] holds everything about an analysis except the portfolio:
//! the principal, horizon, how annual returns are drawn, the number of
//! simulated trajectories, and the yearly inflation rate. An [`AnalysisPlan`]
//! pairs one scenario with the portfolios to run through it.
//!
//! ```ignore
//! use portfolio_analyzer_core::config::{ReturnMode, Scenario};
//!
//! let scenario = Scenario::default()
//!     .with_principal(250_000.0)
//!     .with_num_years(30)
//!     .with_return_mode(ReturnMode::Fixed);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::Portfolio;
use crate::rng::RANDOM_SEED;

fn default_principal() -> f32 {
    100_000.0
}

fn default_num_years() -> u32 {
    20
}

fn default_num_simulations() -> usize {
    10_000
}

fn default_inflation_rate() -> f32 {
    3.0
}

fn default_seed() -> u64 {
    RANDOM_SEED
}

fn default_portfolios() -> Vec<Arc<Portfolio>> {
    vec![
        Arc::new(Portfolio::aggressive()),
        Arc::new(Portfolio::very_conservative()),
    ]
}

/// How annual return rates are drawn along one trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMode {
    /// One rate drawn once and applied to every year
    Fixed,
    /// A fresh, independent rate drawn for each year
    #[default]
    Varying,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Amount invested at the start of the horizon
    #[serde(default = "default_principal")]
    pub principal: f32,

    /// Length of the horizon in years
    #[serde(default = "default_num_years")]
    pub num_years: u32,

    #[serde(default)]
    pub return_mode: ReturnMode,

    /// Number of independent trajectories to simulate
    #[serde(default = "default_num_simulations")]
    pub num_simulations: usize,

    /// Yearly inflation in percent, compounded once per year
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            num_years: default_num_years(),
            return_mode: ReturnMode::default(),
            num_simulations: default_num_simulations(),
            inflation_rate: default_inflation_rate(),
        }
    }
}

impl Scenario {
    #[must_use]
    pub fn with_principal(mut self, principal: f32) -> Self {
        self.principal = principal;
        self
    }

    #[must_use]
    pub fn with_num_years(mut self, num_years: u32) -> Self {
        self.num_years = num_years;
        self
    }

    #[must_use]
    pub fn with_return_mode(mut self, return_mode: ReturnMode) -> Self {
        self.return_mode = return_mode;
        self
    }

    #[must_use]
    pub fn with_num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = num_simulations;
        self
    }

    #[must_use]
    pub fn with_inflation_rate(mut self, inflation_rate: f32) -> Self {
        self.inflation_rate = inflation_rate;
        self
    }
}

/// A scenario together with the portfolios to analyze under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPlan {
    /// Seed for the generator shared by every analysis in the plan
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub scenario: Scenario,

    /// Shared with every [`AnalysisResult`](crate::AnalysisResult) produced for them
    #[serde(default = "default_portfolios")]
    pub portfolios: Vec<Arc<Portfolio>>,
}

impl Default for AnalysisPlan {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            scenario: Scenario::default(),
            portfolios: default_portfolios(),
        }
    }
}
