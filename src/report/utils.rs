//! Utility functions for report formatting
//!
//! Shared helpers used across the report formatters.

use crate::errors::AppResult;
use crate::types::visualisation::PlotlyChart;
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use heat_load_analyser::report::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(8760), "8,760");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format a load figure in MBH with one decimal and thousand separators
///
/// # Examples
///
/// ```
/// # use heat_load_analyser::report::utils::format_mbh;
/// assert_eq!(format_mbh(1234.56), "1,234.6");
/// assert_eq!(format_mbh(0.0), "0.0");
/// ```
pub fn format_mbh(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.split_once('.') {
        Some((whole, frac)) => {
            let sign = if whole.starts_with('-') { "-" } else { "" };
            let digits = whole.trim_start_matches('-');
            let grouped = format_number(digits.parse::<usize>().unwrap_or(0));
            format!("{}{}.{}", sign, grouped, frac)
        }
        None => formatted,
    }
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| crate::errors::AppError::Config(format!("JSON export failed: {}", e)))
}

/// Render a chart as a standalone HTML page
///
/// Loads Plotly.js from its CDN so the file opens directly in a browser
/// with no local tooling.
pub fn render_standalone_html(title: &str, chart: &PlotlyChart) -> AppResult<String> {
    let spec = export_json(chart)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
</head>
<body>
<div id="chart" style="width:100%;height:100vh;"></div>
<script>
const spec = {spec};
Plotly.newPlot("chart", spec.data, spec.layout, {{responsive: true}});
</script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::visualisation::{PlotlyLayout, PlotlyTrace};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(8_760), "8,760");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_mbh() {
        assert_eq!(format_mbh(0.0), "0.0");
        assert_eq!(format_mbh(42.25), "42.2");
        assert_eq!(format_mbh(42.35), "42.4");
        assert_eq!(format_mbh(1234.56), "1,234.6");
        assert_eq!(format_mbh(-17.04), "-17.0");
    }

    #[test]
    fn test_render_standalone_html() {
        let chart = PlotlyChart {
            data: vec![PlotlyTrace::bar(
                vec!["a".to_string()],
                vec![1.0],
                "t",
                "#00C496",
            )],
            layout: PlotlyLayout::basic("Test", "x", "y"),
        };
        let html = render_standalone_html("Test Chart", &chart).unwrap();
        assert!(html.contains("<title>Test Chart</title>"));
        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains("Plotly.newPlot"));
    }
}
