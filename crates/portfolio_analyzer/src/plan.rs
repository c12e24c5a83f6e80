//! Analysis plan loading
//!
//! A plan file is YAML; every field is optional and falls back to the preset
//! run (seed 1, 100k over 20 years, 10k simulations, 3% inflation, the
//! aggressive and very conservative portfolios):
//!
//! ```yaml
//! seed: 7
//! scenario:
//!   principal: 250000.0
//!   num_years: 30
//!   return_mode: fixed
//! portfolios:
//!   - name: balanced
//!     mean_return_rate: 7.5
//!     std_return_rate: 10.0
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use portfolio_analyzer_core::{AnalysisPlan, ReturnMode};

/// Error types for plan loading
#[derive(Debug)]
pub enum PlanError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Io(msg) => write!(f, "IO error: {msg}"),
            PlanError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Parse a plan from YAML text.
pub fn parse_plan(yaml: &str) -> Result<AnalysisPlan, PlanError> {
    serde_saphyr::from_str(yaml).map_err(|e| PlanError::Parse(format!("Failed to parse plan: {e}")))
}

/// Load a plan from a YAML file.
pub fn load_plan(path: &Path) -> Result<AnalysisPlan, PlanError> {
    let content = fs::read_to_string(path).map_err(|e| {
        PlanError::Io(format!("Failed to read plan {}: {e}", path.display()))
    })?;
    parse_plan(&content)
}

/// Load the plan at `config`, or the preset plan when none is given, then
/// apply the command-line overrides.
pub fn resolve_plan(
    config: Option<&Path>,
    overrides: &PlanOverrides,
) -> color_eyre::Result<AnalysisPlan> {
    let plan = match config {
        Some(path) => load_plan(path)
            .wrap_err_with(|| format!("Failed to load analysis plan from {}", path.display()))?,
        None => AnalysisPlan::default(),
    };
    Ok(overrides.apply(plan))
}

/// Command-line overrides applied on top of a loaded plan
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlanOverrides {
    /// Seed for the simulation generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Amount invested at the start of the horizon
    #[arg(long)]
    pub principal: Option<f32>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Number of simulated trajectories per portfolio
    #[arg(long)]
    pub simulations: Option<usize>,

    /// Yearly inflation rate in percent
    #[arg(long)]
    pub inflation: Option<f32>,

    /// Draw one return rate per trajectory instead of one per year
    #[arg(long)]
    pub fixed_returns: bool,
}

impl PlanOverrides {
    #[must_use]
    pub fn apply(&self, mut plan: AnalysisPlan) -> AnalysisPlan {
        if let Some(seed) = self.seed {
            plan.seed = seed;
        }
        let scenario = &mut plan.scenario;
        if let Some(principal) = self.principal {
            scenario.principal = principal;
        }
        if let Some(years) = self.years {
            scenario.num_years = years;
        }
        if let Some(simulations) = self.simulations {
            scenario.num_simulations = simulations;
        }
        if let Some(inflation) = self.inflation {
            scenario.inflation_rate = inflation;
        }
        if self.fixed_returns {
            scenario.return_mode = ReturnMode::Fixed;
        }
        plan
    }
}
