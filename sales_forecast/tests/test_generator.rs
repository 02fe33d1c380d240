use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sales_forecast::sample::SampleDataGenerator;
use sales_forecast::{ForecastConfig, ForecastError, ForecastGenerator, ForecastMethod, TimeSeries};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly(values: Vec<f64>) -> TimeSeries {
    TimeSeries::monthly_from(date(2022, 1, 31), values).unwrap()
}

fn default_generator() -> ForecastGenerator {
    let config = ForecastConfig::default();
    ForecastGenerator::from_config(&config).unwrap()
}

#[test]
fn test_generates_all_three_methods() {
    let series = monthly((0..24).map(|v| 100.0 + v as f64).collect());
    let sets = default_generator().generate(&series, 6).unwrap();

    let methods: Vec<ForecastMethod> = sets.iter().map(|set| set.method()).collect();
    assert_eq!(methods, ForecastMethod::ALL.to_vec());
    assert!(sets.iter().all(|set| set.horizon() == 6));
}

#[test]
fn test_future_dates_follow_last_month() {
    // Last observation is 2022-12-31
    let series = monthly(vec![50.0; 12]);
    let sets = default_generator().generate(&series, 3).unwrap();

    for set in &sets {
        assert_eq!(
            set.dates(),
            &[date(2023, 1, 31), date(2023, 2, 28), date(2023, 3, 31)]
        );
    }
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(11)]
fn test_insufficient_history(#[case] len: usize) {
    let series = monthly(vec![10.0; len]);
    let result = default_generator().generate(&series, 6);

    match result {
        Err(ForecastError::InsufficientHistory {
            required, actual, ..
        }) => {
            assert_eq!(required, 12);
            assert_eq!(actual, len);
        }
        other => panic!("Expected InsufficientHistory, got {:?}", other),
    }
}

#[test]
fn test_zero_horizon_is_invalid() {
    let series = monthly(vec![10.0; 12]);
    assert!(matches!(
        default_generator().generate(&series, 0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_alternating_series_seasonal_naive() {
    let series = monthly([10.0, 20.0].repeat(6));
    let sets = default_generator().generate(&series, 2).unwrap();

    let seasonal = sets
        .iter()
        .find(|set| set.method() == ForecastMethod::SeasonalNaive)
        .unwrap();
    assert_eq!(seasonal.values(), &[10.0, 20.0]);

    let rolling = sets
        .iter()
        .find(|set| set.method() == ForecastMethod::RollingMean)
        .unwrap();
    assert_eq!(rolling.values(), &[15.0, 15.0]);
}

#[test]
fn test_alpha_changes_smoothing_forecast() {
    let series = monthly((0..12).map(|v| v as f64 * 10.0).collect());

    let slow = ForecastGenerator::new(0.1, 12).unwrap();
    let fast = ForecastGenerator::new(0.9, 12).unwrap();

    let level = |generator: &ForecastGenerator| {
        generator
            .generate(&series, 1)
            .unwrap()
            .into_iter()
            .find(|set| set.method() == ForecastMethod::ExponentialSmoothing)
            .unwrap()
            .values()[0]
    };

    // An upward trend is tracked more closely with a larger alpha
    assert!(level(&fast) > level(&slow));
    assert!(level(&fast) <= 110.0);
}

#[test]
fn test_generation_is_idempotent() {
    let sample = SampleDataGenerator::new().months(40).seed(3);
    let series = sample.generate().unwrap();
    let generator = default_generator();

    let first = generator.generate(&series, 9).unwrap();
    let second = generator.generate(&series, 9).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_raised_minimum_history() {
    let generator = ForecastGenerator::new(0.3, 24).unwrap();
    let series = monthly(vec![1.0; 20]);
    assert!(matches!(
        generator.generate(&series, 6),
        Err(ForecastError::InsufficientHistory { required: 24, .. })
    ));
    assert_eq!(generator.min_history(), 24);
}

#[test]
fn test_minimum_history_below_one_season_rejected() {
    assert!(matches!(
        ForecastGenerator::new(0.3, 11),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_smoothed_history_matches_series_length() {
    let series = monthly(vec![
        100.0, 120.0, 90.0, 130.0, 80.0, 110.0, 95.0, 105.0, 100.0, 115.0, 85.0, 125.0,
    ]);
    let smoothed = default_generator().smoothed_history(&series).unwrap();

    assert_eq!(smoothed.len(), series.len());
    assert_eq!(smoothed[0], 100.0);
    approx::assert_relative_eq!(smoothed[1], 106.0, epsilon = 1e-12);
}
