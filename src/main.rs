use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use outdoor_suitability::{
    AssessmentResult, OpenMeteoClient, OutdoorAssessor, SuitabilityConfig, SuitabilityError,
    logging,
};

/// Check whether current weather is suitable for outdoor activities
#[derive(Debug, Parser)]
#[command(name = "outdoor-suitability", version, about)]
struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn print_summary(result: &AssessmentResult) {
    let verdict = if result.is_good_for_outdoor {
        "Good for outdoor activities"
    } else {
        "Better stay indoors"
    };
    let weather = &result.weather_data;

    println!("Score: {}/100 ({verdict})", result.score);
    println!("{}", result.reason);
    println!();
    println!("Observed at:   {}", weather.time);
    println!("Weather:       {}", weather.description);
    println!("Temperature:   {}", weather.format_temperature());
    println!("Wind:          {}", weather.format_wind());
    println!("Precipitation: {}", weather.format_precipitation());
    println!("Visibility:    {}", weather.format_visibility());
    println!("UV index:      {:.1}", weather.uv_index);
    println!();
    for (factor, severity) in result.conditions.entries() {
        println!("  {factor:<14} {severity}");
    }

    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {warning}");
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = SuitabilityConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging)?;

    let client = OpenMeteoClient::new(config.weather.clone())?;
    let assessor = OutdoorAssessor::new(client);
    let result = assessor.assess(cli.lat, cli.lon).await?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result)
            .with_context(|| "Failed to serialize assessment")?;
        println!("{json}");
    } else {
        print_summary(&result);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<SuitabilityError>() {
                Some(suitability_err) => {
                    eprintln!("Error: {}", suitability_err.user_message());
                    tracing::debug!("{suitability_err:?}");
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
