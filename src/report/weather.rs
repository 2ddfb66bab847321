//! Weather file report formatter
//!
//! Summarises an EPW series per field (min/max/mean) for the console and
//! JSON, and renders a point-trend chart with one toggleable trace per
//! field for Plotly/HTML output.

use super::utils::{export_json, format_number, render_standalone_html};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::visualisation::{PlotlyChart, PlotlyLayout, PlotlyTrace};
use crate::types::weather::{UnitSystem, WeatherSeries, WEATHER_FIELDS};
use serde::Serialize;

/// Trace colours cycled across the weather fields
const FIELD_COLOURS: &[&str] = &[
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22",
];

/// Min/max/mean summary for one weather field
#[derive(Debug, Clone, Serialize)]
pub struct WeatherFieldSummary {
    pub field: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Weather report: site header plus per-field summaries
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub record_count: usize,
    pub fields: Vec<WeatherFieldSummary>,
    #[serde(skip)]
    series: WeatherSeries,
}

/// Display unit for a field in the given unit system
fn field_unit(name: &str, units: UnitSystem) -> &'static str {
    let ip = units == UnitSystem::Ip;
    match name {
        "Dry Bulb Temperature" | "Dew Point Temperature" => {
            if ip {
                "degF"
            } else {
                "degC"
            }
        }
        "Relative Humidity" => "%",
        "Atmospheric Pressure" => {
            if ip {
                "inHg"
            } else {
                "Pa"
            }
        }
        "Global Horizontal Radiation"
        | "Direct Normal Radiation"
        | "Diffuse Horizontal Radiation" => {
            if ip {
                "Btu/h-ft2"
            } else {
                "Wh/m2"
            }
        }
        "Wind Direction" => "deg",
        "Wind Speed" => {
            if ip {
                "mph"
            } else {
                "m/s"
            }
        }
        _ => "",
    }
}

impl WeatherReport {
    pub fn new(series: WeatherSeries) -> Self {
        let fields = WEATHER_FIELDS
            .iter()
            .filter_map(|&name| {
                let values = series.field_values(name)?;
                if values.is_empty() {
                    return None;
                }
                let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
                let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                Some(WeatherFieldSummary {
                    field: name.to_string(),
                    unit: field_unit(name, series.units).to_string(),
                    min,
                    max,
                    mean,
                })
            })
            .collect();

        Self {
            city: series.location.city.clone(),
            state_province: series.location.state_province.clone(),
            country: series.location.country.clone(),
            record_count: series.len(),
            fields,
            series,
        }
    }

    /// Build the point-trend chart: one line trace per field
    ///
    /// Dry bulb is shown by default; the other fields start legend-only so
    /// the chart opens readable and each can be toggled on.
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let timestamps: Vec<String> = self
            .series
            .records
            .iter()
            .map(|r| r.timestamp.format("%Y-%m-%d %H:%M").to_string())
            .collect();

        let data = WEATHER_FIELDS
            .iter()
            .enumerate()
            .filter_map(|(i, &name)| {
                let values = self.series.field_values(name)?;
                let unit = field_unit(name, self.series.units);
                let trace = PlotlyTrace::line(
                    timestamps.clone(),
                    values,
                    &format!("{} ({})", name, unit),
                    FIELD_COLOURS[i % FIELD_COLOURS.len()],
                );
                Some(if i == 0 {
                    trace
                } else {
                    trace.hidden_by_default()
                })
            })
            .collect();

        let layout = PlotlyLayout::basic(
            &format!("Weather Observations - {}", self.city),
            "Timestamp",
            "Value",
        )
        .with_legend();

        PlotlyChart { data, layout }
    }
}

/// Format a weather report in the requested output format
pub fn format_weather(report: &WeatherReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&report.to_plotly_chart()),
        OutputFormat::Html => render_standalone_html(
            &format!("Weather Observations - {}", report.city),
            &report.to_plotly_chart(),
        ),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("\n=== WEATHER FILE SUMMARY ===\n\n");
            output.push_str(&format!(
                "Site: {}, {}, {}\n",
                report.city, report.state_province, report.country
            ));
            output.push_str(&format!(
                "Records: {}\n\n",
                format_number(report.record_count)
            ));

            output.push_str(&format!(
                "  {:<30} │ {:>10} │ {:>10} │ {:>10} │\n",
                "Field", "Min", "Max", "Mean"
            ));
            output.push_str(
                "  ───────────────────────────────┼────────────┼────────────┼────────────┤\n",
            );
            for summary in &report.fields {
                output.push_str(&format!(
                    "  {:<30} │ {:>10.1} │ {:>10.1} │ {:>10.1} │\n",
                    format!("{} ({})", summary.field, summary.unit),
                    summary.min,
                    summary.max,
                    summary.mean
                ));
            }
            output.push('\n');

            Ok(output)
        }
    }
}
