//! `weather` command: EPW summary and point-trend chart

use super::{deliver_output, filename_slug};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::report::{format_weather, OutputFormat, WeatherReport};
use crate::source::EpwReader;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Summarise an EnergyPlus .epw weather file
#[derive(Args)]
pub struct WeatherCommand {
    /// Path to the .epw file
    #[arg(long)]
    pub epw_path: PathBuf,

    /// Convert values to IP units (degF, inHg, mph, Btu/h-ft2)
    #[arg(long)]
    pub ip: bool,

    /// Output format: console, json, plotly, html
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (defaults under the configured output directory
    /// for non-console formats)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl WeatherCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        info!("Reading weather file {}", self.epw_path.display());
        let mut series = EpwReader::new(&self.epw_path).read()?;
        if self.ip {
            series = series.to_ip();
        }

        let report = WeatherReport::new(series);
        let format = OutputFormat::parse(&self.format);
        let content = format_weather(&report, &format)?;

        let default_path = app_config.paths.output_dir.join(format!(
            "weather_{}.{}",
            filename_slug(&report.city),
            format.extension()
        ));
        deliver_output(
            &content,
            &format,
            &self.output,
            default_path,
            "Weather report",
        )
    }
}
