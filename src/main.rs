use std::env;

use airsight::{AirSightConfig, AqiApiClient, CityAirReport, build_report};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Ok(());
    }
    let city = args.join(" ");

    let config = AirSightConfig::load()?;
    config.validate()?;
    init_logging(&config);

    let client = AqiApiClient::new(config)?;
    let report = build_report(&client, &city);
    render(&report);

    Ok(())
}

fn init_logging(config: &AirSightConfig) {
    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn render(report: &CityAirReport) {
    println!("Air quality for {}", report.city);

    match (&report.reading, report.tier) {
        (Some(reading), Some(tier)) => {
            println!("  AQI: {} ({})", reading.aqi, tier.label());
            println!("  {}", tier.advisory());
            if let Some(station) = &reading.station {
                println!("  Station: {station}");
            }
            if let Some(observed_at) = reading.observed_at {
                println!("  Observed: {observed_at}");
            }
        }
        _ => println!("  AQI: unavailable"),
    }

    println!("  Tint: {} ({})", report.tint.name(), report.tint.hex());

    match &report.coordinate {
        Some(location) => println!("  Map marker: {}", location.format_coordinates()),
        None => println!("  Map marker: none"),
    }

    for problem in &report.problems {
        println!("  ! {problem}");
    }
}

fn print_usage() {
    println!("AirSight - city air quality dashboard");
    println!();
    println!("Usage: airsight <city name>");
    println!();
    println!("Examples:");
    println!("  airsight Delhi");
    println!("  airsight Mumbai");
    println!();
    println!("A WAQI API token is required. Set api.token in config.toml or the");
    println!("AIRSIGHT_API__TOKEN environment variable.");
    println!();
    println!("About AQI: the Air Quality Index measures air pollution levels.");
    println!("Lower values mean better air quality, while higher values indicate");
    println!("greater health risks.");
}
