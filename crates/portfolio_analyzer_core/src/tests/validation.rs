//! Rejected inputs and small-sample boundaries

use crate::config::{ReturnMode, Scenario};
use crate::error::AnalysisError;
use crate::model::Portfolio;
use crate::simulation::SimulationEngine;

#[test]
fn test_zero_simulations_is_rejected() {
    let mut engine = SimulationEngine::new();
    let err = engine
        .run_analysis(
            Portfolio::aggressive(),
            &Scenario::default().with_num_simulations(0),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::InvalidSampleSize {
            num_simulations: 0,
            ..
        }
    ));
}

#[test]
fn test_failed_run_leaves_stream_untouched() {
    let mut engine = SimulationEngine::new();
    let before = engine.source().clone();

    let _ = engine.run_analysis(
        Portfolio::aggressive(),
        &Scenario::default().with_num_simulations(0),
    );

    assert_eq!(engine.source(), &before);
}

#[test]
fn test_negative_std_dev_is_rejected() {
    let err = Portfolio::new("upside down", 8.0, -3.0).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InvalidPortfolioParameters { .. }
    ));
    assert!(err.to_string().contains("non-negative"));
}

/// With a single simulation every percentile rank floors to index 0.
#[test]
fn test_single_simulation() {
    let portfolio = Portfolio::aggressive();
    let scenario = Scenario::default().with_num_simulations(1);

    let result = SimulationEngine::new()
        .run_analysis(portfolio.clone(), &scenario)
        .unwrap();

    let only = SimulationEngine::new().compute_inflation_adjusted_return(
        scenario.principal,
        &portfolio,
        scenario.num_years,
        ReturnMode::Varying,
        scenario.inflation_rate,
    );

    assert_eq!(result.tenth_percentile_worst_case(), only);
    assert_eq!(result.median_returns(), only);
    assert_eq!(result.tenth_percentile_best_case(), only);
}

/// Below ten simulations the worst case is the smallest sample.
#[test]
fn test_worst_case_floors_to_minimum_below_ten() {
    let portfolio = Portfolio::aggressive();

    for n in 1..=9 {
        let scenario = Scenario::default().with_num_simulations(n);

        let mut replay = SimulationEngine::with_seed(3);
        let mut sample: Vec<f32> = (0..n)
            .map(|_| {
                replay.compute_inflation_adjusted_return(
                    scenario.principal,
                    &portfolio,
                    scenario.num_years,
                    scenario.return_mode,
                    scenario.inflation_rate,
                )
            })
            .collect();
        sample.sort_by(f32::total_cmp);

        let result = SimulationEngine::with_seed(3)
            .run_analysis(portfolio.clone(), &scenario)
            .unwrap();

        assert_eq!(result.tenth_percentile_worst_case(), sample[0], "n={n}");
        assert_eq!(result.median_returns(), sample[n / 2], "n={n}");
        assert_eq!(
            result.tenth_percentile_best_case(),
            sample[(n as f64 * 0.9) as usize],
            "n={n}"
        );
    }
}

/// At ten simulations the worst case moves off the minimum while the best
/// case is still the maximum.
#[test]
fn test_ten_simulations_ranks() {
    let portfolio = Portfolio::very_conservative();
    let scenario = Scenario::default().with_num_simulations(10);

    let mut replay = SimulationEngine::new();
    let mut sample: Vec<f32> = (0..10)
        .map(|_| {
            replay.compute_inflation_adjusted_return(
                scenario.principal,
                &portfolio,
                scenario.num_years,
                scenario.return_mode,
                scenario.inflation_rate,
            )
        })
        .collect();
    sample.sort_by(f32::total_cmp);

    let result = SimulationEngine::new()
        .run_analysis(portfolio, &scenario)
        .unwrap();

    assert_eq!(result.tenth_percentile_worst_case(), sample[1]);
    assert_eq!(result.median_returns(), sample[5]);
    assert_eq!(result.tenth_percentile_best_case(), sample[9]);
}
