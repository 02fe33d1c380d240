use approx::assert_relative_eq;
use chrono::NaiveDate;
use rstest::rstest;
use sales_forecast::sample::SampleDataGenerator;
use sales_forecast::{AccuracyEvaluator, ForecastConfig, ForecastMethod, TimeSeries};

fn monthly(values: Vec<f64>) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    TimeSeries::monthly_from(start, values).unwrap()
}

fn evaluator() -> AccuracyEvaluator {
    let config = ForecastConfig::default();
    AccuracyEvaluator::from_config(&config).unwrap()
}

#[rstest]
#[case(0, false)]
#[case(12, false)]
#[case(17, false)]
#[case(18, true)]
#[case(30, true)]
fn test_evaluation_gate(#[case] len: usize, #[case] evaluated: bool) {
    let series = monthly(vec![100.0; len]);
    let report = evaluator().evaluate(&series).unwrap();
    assert_eq!(report.is_some(), evaluated);
}

#[test]
fn test_constant_series_scores_zero() {
    let series = monthly(vec![100.0; 18]);
    let report = evaluator().evaluate(&series).unwrap().unwrap();

    assert_eq!(report.metrics.len(), 3);
    for method in ForecastMethod::ALL {
        let metrics = report.get(method).unwrap();
        assert_relative_eq!(metrics.mae, 0.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.rmse, 0.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.mape.unwrap(), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_holdout_is_last_six_months() {
    let series = monthly((1..=20).map(|v| v as f64).collect());
    let report = evaluator().evaluate(&series).unwrap().unwrap();

    let dates = series.dates();
    assert_eq!(report.holdout_dates, dates[14..].to_vec());
}

#[test]
fn test_metrics_match_hand_computation() {
    // Training: months 1..=12 hold 10, 20, ..., 120; holdout: six months of 100
    let mut values: Vec<f64> = (1..=12).map(|v| v as f64 * 10.0).collect();
    values.extend(vec![100.0; 6]);
    let report = evaluator().evaluate(&monthly(values)).unwrap().unwrap();

    // Rolling mean of the training window is 65
    let rolling = report.get(ForecastMethod::RollingMean).unwrap();
    assert_relative_eq!(rolling.mae, 35.0, epsilon = 1e-9);
    assert_relative_eq!(rolling.rmse, 35.0, epsilon = 1e-9);
    assert_relative_eq!(rolling.mape.unwrap(), 35.0, epsilon = 1e-9);

    // Seasonal naive predicts 10, 20, ..., 60 for the holdout
    let seasonal = report.get(ForecastMethod::SeasonalNaive).unwrap();
    let errors = [90.0, 80.0, 70.0, 60.0, 50.0, 40.0];
    let mae = errors.iter().sum::<f64>() / 6.0;
    let rmse = (errors.iter().map(|e| e * e).sum::<f64>() / 6.0).sqrt();
    assert_relative_eq!(seasonal.mae, mae, epsilon = 1e-9);
    assert_relative_eq!(seasonal.rmse, rmse, epsilon = 1e-9);
    assert_relative_eq!(seasonal.mape.unwrap(), mae, epsilon = 1e-9);
}

#[test]
fn test_metrics_are_non_negative() {
    for seed in 0..10 {
        let series = SampleDataGenerator::new()
            .months(18 + seed as usize)
            .seed(seed)
            .generate()
            .unwrap();
        let report = evaluator().evaluate(&series).unwrap().unwrap();

        for metrics in report.metrics.values() {
            assert!(metrics.mae >= 0.0);
            assert!(metrics.rmse >= 0.0);
            assert!(metrics.rmse >= metrics.mae - 1e-9);
            assert!(metrics.mape.unwrap() >= 0.0);
        }
    }
}

#[test]
fn test_zero_holdout_actuals() {
    let mut values = vec![100.0; 12];
    values.extend([0.0, 50.0, 0.0, 100.0, 0.0, 100.0]);
    let report = evaluator().evaluate(&monthly(values)).unwrap().unwrap();

    let rolling = report.get(ForecastMethod::RollingMean).unwrap();
    assert_eq!(rolling.zero_actuals_skipped, 3);
    // Non-zero points: |50-100|/50, 0, 0 -> mean 1/3
    assert_relative_eq!(rolling.mape.unwrap(), 100.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_all_zero_holdout_has_undefined_mape() {
    let mut values = vec![100.0; 12];
    values.extend(vec![0.0; 6]);
    let report = evaluator().evaluate(&monthly(values)).unwrap().unwrap();

    for metrics in report.metrics.values() {
        assert_eq!(metrics.mape, None);
        assert_eq!(metrics.zero_actuals_skipped, 6);
        assert!(metrics.mae.is_finite());
    }
}

#[test]
fn test_custom_evaluation_threshold() {
    let config = ForecastConfig::default()
        .with_min_history_for_evaluation(24);
    let evaluator = AccuracyEvaluator::from_config(&config).unwrap();
    assert_eq!(evaluator.min_history(), 24);

    let short = monthly(vec![1.0; 23]);
    let long = monthly(vec![1.0; 24]);
    assert!(evaluator.evaluate(&short).unwrap().is_none());
    assert!(evaluator.evaluate(&long).unwrap().is_some());
}
