//! `analyse` command: part-load distribution of a load series

use super::{deliver_output, filename_slug};
use crate::analysis::distribution::LoadDistributionBinner;
use crate::analysis::intensity::HeatingIntensityAnalyser;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::report::{format_load_profile, LoadProfileReport, OutputFormat};
use crate::source::{CsvLoadSource, EpwFieldSource, LoadSeriesSource};
use crate::types::distribution::{BinningConfig, EdgePolicy};
use crate::types::load::SeriesMetadata;
use chrono::Duration;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Bin a load series into part-load increments of design capacity
#[derive(Args)]
pub struct AnalyseCommand {
    /// Load-profile CSV (overrides the configured default)
    #[arg(long)]
    pub csv_path: Option<PathBuf>,

    /// Bin a field of an EnergyPlus .epw file instead of a CSV
    #[arg(long, conflicts_with = "csv_path")]
    pub epw_path: Option<PathBuf>,

    /// Weather field to bin (required with --epw-path)
    #[arg(long, requires = "epw_path")]
    pub field: Option<String>,

    /// Design capacity in MBH (the 100% part-load reference)
    #[arg(long)]
    pub design_mbh: f64,

    /// Gross floor area in square feet; enables Btu/sf intensity figures
    #[arg(long)]
    pub floor_area_sf: Option<f64>,

    /// Number of part-load bins (overrides the configured default)
    #[arg(long)]
    pub bin_count: Option<usize>,

    /// Bin boundary convention
    #[arg(long, value_enum)]
    pub edge_policy: Option<EdgePolicy>,

    /// Uniform sample spacing in hours; skips spacing derivation
    #[arg(long)]
    pub time_step_hours: Option<f64>,

    /// Series name shown in reports (defaults to the input file stem)
    #[arg(long)]
    pub series_name: Option<String>,

    /// Output format: console, json, plotly, html
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (defaults under the configured output directory
    /// for non-console formats)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let (source, input_path): (Box<dyn LoadSeriesSource>, &Path) =
            if let Some(epw_path) = &self.epw_path {
                let field = self.field.as_deref().ok_or_else(|| {
                    AppError::Config("--field is required with --epw-path".to_string())
                })?;
                let metadata = self.metadata_for(epw_path);
                (
                    Box::new(EpwFieldSource::new(epw_path, field, metadata)),
                    epw_path,
                )
            } else {
                let csv_path = self
                    .csv_path
                    .as_deref()
                    .unwrap_or_else(|| app_config.paths.load_csv.as_path());
                let metadata = self.metadata_for(csv_path);
                (Box::new(CsvLoadSource::new(csv_path, metadata)), csv_path)
            };

        info!("Analysing load series from {}", input_path.display());
        let series = source.load_series()?;

        let binning = BinningConfig {
            bin_count: self.bin_count.unwrap_or(app_config.binning.bin_count),
            edge_policy: self.edge_policy.unwrap_or_default(),
        };
        let time_step = self
            .time_step_hours
            .map(|hours| Duration::milliseconds((hours * 3_600_000.0).round() as i64));

        let distribution = LoadDistributionBinner::compute_distribution(
            &series.samples,
            self.design_mbh,
            &binning,
            time_step,
        )?;

        let intensity = self
            .floor_area_sf
            .map(|area| HeatingIntensityAnalyser::analyse(self.design_mbh, distribution.max_load, area))
            .transpose()?;

        let report = LoadProfileReport::new(series.metadata.clone(), distribution, intensity);
        let format = OutputFormat::parse(&self.format);
        let content = format_load_profile(&report, &format)?;

        let default_path = app_config.paths.output_dir.join(format!(
            "load_profile_{}.{}",
            filename_slug(&report.metadata.name),
            format.extension()
        ));
        deliver_output(
            &content,
            &format,
            &self.output,
            default_path,
            "Load profile report",
        )
    }

    /// Series metadata from CLI arguments, named after the input file when
    /// no explicit name is given
    fn metadata_for(&self, input_path: &Path) -> SeriesMetadata {
        let name = self.series_name.clone().unwrap_or_else(|| {
            input_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "Load Profile".to_string())
        });
        SeriesMetadata {
            name,
            design_capacity_mbh: self.design_mbh,
            gross_floor_area_sf: self.floor_area_sf,
        }
    }
}
