//! Portfolio outcome analysis library
//!
//! This crate estimates the distribution of long-horizon investment outcomes
//! for a portfolio described by the mean and standard deviation of its annual
//! return. It provides:
//! - A seeded Monte Carlo engine with fixed or year-by-year varying returns
//! - Inflation adjustment compounded once per year
//! - Percentile-by-index extraction (P10, P50, P90) from the sorted sample
//! - A reproducible default generator so outputs can be pinned in tests
//!
//! ```ignore
//! use portfolio_analyzer_core::{Portfolio, Scenario, SimulationEngine};
//!
//! let mut engine = SimulationEngine::new();
//! let result = engine.run_analysis(Portfolio::aggressive(), &Scenario::default())?;
//! println!("{result}");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod percentiles;
pub mod rng;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use config::{AnalysisPlan, ReturnMode, Scenario};
pub use error::AnalysisError;
pub use model::{AnalysisResult, Portfolio};
pub use simulation::SimulationEngine;
