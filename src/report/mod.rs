//! Report formatting and output generation
//!
//! Formats analysis results for the terminal, for JSON consumers, and as
//! Plotly chart specifications (raw JSON or a standalone HTML page).

pub mod load_profile;
pub mod utils;
pub mod weather;

pub use load_profile::{format_load_profile, LoadProfileReport};
pub use weather::{format_weather, WeatherReport};

/// Output format options for analysis reports
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Plotly,
    Html,
}

impl OutputFormat {
    /// Parse a format name; anything unrecognised falls back to console
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "plotly" => OutputFormat::Plotly,
            "html" => OutputFormat::Html,
            _ => OutputFormat::Console,
        }
    }

    /// Conventional file extension for persisted output
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Console => "txt",
            OutputFormat::Json | OutputFormat::Plotly => "json",
            OutputFormat::Html => "html",
        }
    }
}
