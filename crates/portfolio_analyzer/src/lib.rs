//! Command-line front end for portfolio outcome analysis
//!
//! Loads an [`AnalysisPlan`], runs every portfolio through one seeded
//! [`SimulationEngine`], and renders the results as text or JSON.

pub mod logging;
pub mod plan;
pub mod report;

use std::sync::Arc;

use portfolio_analyzer_core::{AnalysisError, AnalysisPlan, AnalysisResult, SimulationEngine};

pub use logging::init_logging;
pub use plan::{PlanError, PlanOverrides, load_plan, parse_plan, resolve_plan};
pub use report::{OutputFormat, render_report};

/// Analyze each portfolio of the plan in order.
///
/// All portfolios share one engine, so each analysis continues the random
/// stream where the previous one stopped.
pub fn run_plan(plan: &AnalysisPlan) -> Result<Vec<AnalysisResult>, AnalysisError> {
    let scenario = &plan.scenario;
    tracing::info!(
        seed = plan.seed,
        principal = scenario.principal,
        num_years = scenario.num_years,
        return_mode = ?scenario.return_mode,
        num_simulations = scenario.num_simulations,
        inflation_rate = scenario.inflation_rate,
        "Running {} portfolio analyses",
        plan.portfolios.len()
    );

    let mut engine = SimulationEngine::with_seed(plan.seed);
    let mut results = Vec::with_capacity(plan.portfolios.len());

    for portfolio in &plan.portfolios {
        let result = engine
            .run_analysis(Arc::clone(portfolio), scenario)
            .inspect_err(|e| tracing::error!("Analysis of {:?} failed: {e}", portfolio.name()))?;

        tracing::debug!(
            portfolio = portfolio.name(),
            median = result.median_returns(),
            worst_case = result.tenth_percentile_worst_case(),
            best_case = result.tenth_percentile_best_case(),
            "Analysis complete"
        );
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_analyzer_core::{Portfolio, Scenario};

    #[test]
    fn test_default_plan_output() {
        let results = run_plan(&AnalysisPlan::default()).unwrap();
        let report = render_report(&results, OutputFormat::Text).unwrap();

        assert_eq!(
            report,
            "Portfolio name: aggressive. Mean return rate: 9.4324. Standard deviation return rate: 15.675. \
             Median returns is 278671.16. 10% best case returns is 631682.0. 10% worst case returns is 118690.86\n\
             Portfolio name: very conservative. Mean return rate: 6.189. Standard deviation return rate: 6.3438. \
             Median returns is 177460.9. 10% best case returns is 251555.44. 10% worst case returns is 125497.266"
        );
    }

    #[test]
    fn test_zero_simulations_fails_whole_plan() {
        let plan = AnalysisPlan {
            scenario: Scenario::default().with_num_simulations(0),
            ..AnalysisPlan::default()
        };
        assert!(matches!(
            run_plan(&plan),
            Err(AnalysisError::InvalidSampleSize { .. })
        ));
    }

    #[test]
    fn test_seed_changes_results() {
        let base = AnalysisPlan {
            scenario: Scenario::default().with_num_simulations(500),
            portfolios: vec![Arc::new(Portfolio::aggressive())],
            ..AnalysisPlan::default()
        };
        let reseeded = AnalysisPlan {
            seed: 2,
            ..base.clone()
        };

        let a = run_plan(&base).unwrap();
        let b = run_plan(&reseeded).unwrap();
        assert_ne!(a[0].median_returns(), b[0].median_returns());
        assert_eq!(run_plan(&base).unwrap(), a);
    }

    #[test]
    fn test_results_share_plan_portfolios() {
        let plan = AnalysisPlan {
            scenario: Scenario::default().with_num_simulations(50),
            ..AnalysisPlan::default()
        };
        let results = run_plan(&plan).unwrap();

        assert_eq!(results.len(), plan.portfolios.len());
        for (result, portfolio) in results.iter().zip(&plan.portfolios) {
            assert!(Arc::ptr_eq(result.portfolio(), portfolio));
        }
    }

    #[test]
    fn test_empty_plan() {
        let plan = AnalysisPlan {
            portfolios: vec![],
            ..AnalysisPlan::default()
        };
        assert!(run_plan(&plan).unwrap().is_empty());
    }
}
