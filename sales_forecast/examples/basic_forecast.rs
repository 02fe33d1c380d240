use sales_forecast::models::exponential_smoothing::ExponentialSmoothing;
use sales_forecast::models::{ForecastModel, TrainedForecastModel};
use sales_forecast::sample::SampleDataGenerator;
use sales_forecast::{run_forecast, ForecastConfig, ForecastMethod};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Basic Forecasting Example");
    println!("=========================================\n");

    // Six years of synthetic monthly sales
    let series = SampleDataGenerator::new().months(72).seed(7).generate()?;
    println!(
        "Sample data created: {} months, mean sales {:.2}\n",
        series.len(),
        series.mean()?
    );

    // A single model, trained directly
    let model = ExponentialSmoothing::new(0.5)?;
    let trained = model.train(&series)?;
    println!("{}: {:?}\n", model.name(), trained.forecast(3)?);

    // The full pipeline with a longer horizon
    let config = ForecastConfig::default().with_horizon(12);
    let report = run_forecast(&series, &config)?;
    println!("{}", report);

    if let Some(metrics) = report.metrics(ForecastMethod::SeasonalNaive) {
        println!("Seasonal naive RMSE on the holdout: {:.2}", metrics.rmse);
    }

    Ok(())
}
