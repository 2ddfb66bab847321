use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub binning: BinningDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Default load-profile CSV consumed by `analyse` when --csv-path is omitted
    pub load_csv: PathBuf,
    /// Directory where chart/report exports are written
    pub output_dir: PathBuf,
}

/// Default binning parameters, overridable per-invocation from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinningDefaults {
    pub bin_count: usize,
}

impl Default for BinningDefaults {
    fn default() -> Self {
        // 20 bins = 5% part-load increments
        Self { bin_count: 20 }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let binning_defaults = BinningDefaults::default();
        let config = Config::builder()
            // Start with default values
            .set_default("paths.load_csv", "./load_profile.csv")?
            .set_default("paths.output_dir", "./output_plots")?
            .set_default("binning.bin_count", binning_defaults.bin_count as i64)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // HEATLOAD_* environment variables override file configuration
            .add_source(config::Environment::with_prefix("HEATLOAD").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(csv_path) = env::var("LOAD_CSV_PATH") {
            app_config.paths.load_csv = PathBuf::from(csv_path);
        }

        if let Ok(output_dir) = env::var("HEATLOAD_OUTPUT_DIR") {
            app_config.paths.output_dir = PathBuf::from(output_dir);
        }

        if app_config.binning.bin_count == 0 {
            return Err(ConfigError::Message(
                "binning.bin_count must be at least 1".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                paths: PathsConfig {
                    load_csv: PathBuf::from("./load_profile.csv"),
                    output_dir: PathBuf::from("./output_plots"),
                },
                binning: BinningDefaults::default(),
            }),
        }
    }
}
