use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// HVAC Heat Load Profile Analyser
#[derive(Parser)]
#[command(name = "heat-load-analyser")]
#[command(about = "HVAC Heat Load Profile Analyser")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bin a load profile into part-load increments and report the distribution
    Analyse(commands::analyse::AnalyseCommand),
    /// Summarise and chart an EnergyPlus .epw weather file
    Weather(commands::weather::WeatherCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse(command) => command.run(),
        Commands::Weather(command) => command.run(),
    }
}
