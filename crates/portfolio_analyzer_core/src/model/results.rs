//! Analysis results
//!
//! An [`AnalysisResult`] is produced once per call to
//! [`SimulationEngine::run_analysis`](crate::simulation::SimulationEngine::run_analysis)
//! and is read-only afterwards.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::format::render_amount;
use super::portfolio::Portfolio;
use crate::percentiles::PercentileSet;

/// Inflation-adjusted outcome percentiles for one portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    portfolio: Arc<Portfolio>,
    investment: f32,
    num_years: u32,
    num_simulations: usize,
    median_returns: f32,
    tenth_percentile_worst_case: f32,
    tenth_percentile_best_case: f32,
}

impl AnalysisResult {
    pub(crate) fn new(
        portfolio: Arc<Portfolio>,
        investment: f32,
        num_years: u32,
        num_simulations: usize,
        percentiles: PercentileSet,
    ) -> Self {
        Self {
            portfolio,
            investment,
            num_years,
            num_simulations,
            median_returns: percentiles.median,
            tenth_percentile_worst_case: percentiles.worst_case,
            tenth_percentile_best_case: percentiles.best_case,
        }
    }

    #[must_use]
    pub fn portfolio(&self) -> &Arc<Portfolio> {
        &self.portfolio
    }

    /// Principal invested at the start of the horizon
    #[must_use]
    pub fn investment(&self) -> f32 {
        self.investment
    }

    #[must_use]
    pub fn num_years(&self) -> u32 {
        self.num_years
    }

    #[must_use]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Terminal value at the 50th percentile
    #[must_use]
    pub fn median_returns(&self) -> f32 {
        self.median_returns
    }

    /// Terminal value at the 10th percentile
    #[must_use]
    pub fn tenth_percentile_worst_case(&self) -> f32 {
        self.tenth_percentile_worst_case
    }

    /// Terminal value at the 90th percentile
    #[must_use]
    pub fn tenth_percentile_best_case(&self) -> f32 {
        self.tenth_percentile_best_case
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Median returns is {}. 10% best case returns is {}. 10% worst case returns is {}",
            self.portfolio,
            render_amount(self.median_returns),
            render_amount(self.tenth_percentile_best_case),
            render_amount(self.tenth_percentile_worst_case)
        )
    }
}
