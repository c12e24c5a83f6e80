//! Percentile extraction from a sorted sample
//!
//! A percentile is the value at rank `floor(len * fraction)` of the
//! ascending-sorted sample. No interpolation between neighbouring ranks.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub const WORST_CASE: f64 = 0.1;
pub const MEDIAN: f64 = 0.5;
pub const BEST_CASE: f64 = 0.9;

/// Rank of `fraction` within a sample of `sample_size` values (truncated).
#[inline]
#[must_use]
pub fn percentile_index(sample_size: usize, fraction: f64) -> usize {
    (sample_size as f64 * fraction) as usize
}

/// Value at `fraction` of an ascending-sorted sample
pub fn percentile_value(sorted: &[f32], fraction: f64) -> Result<f32, AnalysisError> {
    let index = percentile_index(sorted.len(), fraction);
    sorted
        .get(index)
        .copied()
        .ok_or(AnalysisError::InvalidSampleSize {
            num_simulations: sorted.len(),
            reason: "percentile rank falls outside the sample",
        })
}

/// Sort a sample ascending using the IEEE total order.
pub fn sort_sample(sample: &mut [f32]) {
    sample.sort_by(f32::total_cmp);
}

/// The three outcome percentiles reported for an analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSet {
    pub worst_case: f32,
    pub median: f32,
    pub best_case: f32,
}

impl PercentileSet {
    /// Extract P10, P50 and P90 from an ascending-sorted sample.
    ///
    /// An empty sample has no rank to read and is rejected.
    pub fn from_sorted(sorted: &[f32]) -> Result<Self, AnalysisError> {
        Ok(Self {
            worst_case: percentile_value(sorted, WORST_CASE)?,
            median: percentile_value(sorted, MEDIAN)?,
            best_case: percentile_value(sorted, BEST_CASE)?,
        })
    }
}
