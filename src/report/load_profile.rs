//! Load-profile distribution report formatter
//!
//! Turns a [`DistributionResult`] into the console table, JSON document, or
//! dual-axis Plotly figure (part-load bars plus a cumulative-percent line)
//! that the analyse command emits.

use super::utils::{export_json, format_mbh, format_number, render_standalone_html};
use super::OutputFormat;
use crate::analysis::intensity::IntensityMetrics;
use crate::errors::AppResult;
use crate::types::distribution::DistributionResult;
use crate::types::load::SeriesMetadata;
use crate::types::visualisation::{
    PlotlyAnnotation, PlotlyChart, PlotlyLayout, PlotlyTrace, CUMULATIVE_LINE_COLOUR,
    LOAD_BAR_COLOUR,
};
use serde::Serialize;

/// Complete part-load analysis report for one load series
#[derive(Debug, Clone, Serialize)]
pub struct LoadProfileReport {
    pub metadata: SeriesMetadata,
    pub distribution: DistributionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<IntensityMetrics>,
}

impl LoadProfileReport {
    pub fn new(
        metadata: SeriesMetadata,
        distribution: DistributionResult,
        intensity: Option<IntensityMetrics>,
    ) -> Self {
        Self {
            metadata,
            distribution,
            intensity,
        }
    }

    /// Upper-edge part-load percentage label for bin `i` (e.g. "5%")
    fn percent_label(&self, i: usize) -> String {
        format!(
            "{:.0}%",
            (i + 1) as f64 * 100.0 / self.distribution.bin_count as f64
        )
    }

    /// Load range label for bin `i` (e.g. "0-5 MBH")
    fn range_label(&self, i: usize) -> String {
        let (lo, hi) = self.distribution.bin_range(i);
        format!("{:.0}-{:.0} MBH", lo, hi)
    }

    /// Chart category label: bold percent over the load range
    fn chart_label(&self, i: usize) -> String {
        format!("<b>{}</b><br>({})", self.percent_label(i), self.range_label(i))
    }

    /// Stats annotation text for the chart
    fn stats_text(&self) -> String {
        let mut lines = vec![
            format!(
                "Design Capacity: {} MBH",
                format_mbh(self.distribution.design_capacity)
            ),
            format!(
                "Max Actual Load: {} MBH",
                format_mbh(self.distribution.max_load)
            ),
        ];
        if let Some(intensity) = &self.intensity {
            lines.push(format!("Design: {} Btu/sf", intensity.design_btu_per_sf));
            lines.push(format!("Actual: {} Btu/sf", intensity.actual_btu_per_sf));
        }
        lines.join("<br>")
    }

    /// Build the dual-axis part-load figure
    ///
    /// Bars show per-bin load totals on the left axis; the cumulative share
    /// of total load rides the right-hand 0-100% axis.
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let dist = &self.distribution;
        let labels: Vec<String> = (0..dist.bin_count).map(|i| self.chart_label(i)).collect();

        let bars = PlotlyTrace::bar(
            labels.clone(),
            dist.bin_totals.clone(),
            "Load per Bin",
            LOAD_BAR_COLOUR,
        )
        .with_hovertemplate("<b>%{y:,.1f} MBH</b><extra>%{x}</extra>");

        let cumulative = PlotlyTrace::line(
            labels,
            dist.cumulative_percent_of_total_load.clone(),
            "Cumulative % of Total Load",
            CUMULATIVE_LINE_COLOUR,
        )
        .on_secondary_axis()
        .with_hovertemplate("%{y:.1f}%<extra></extra>");

        let mut layout = PlotlyLayout::dual_axis(
            &format!("Part-Load Distribution - {}", self.metadata.name),
            "Part Load (% of Design Capacity)",
            "Load (MBH)",
            "Cumulative % of Total Load",
        )
        .with_annotations(vec![PlotlyAnnotation::stats_box(
            &self.stats_text(),
            0.02,
            0.98,
        )]);
        // Labels are strings, keep Plotly from guessing a linear axis
        layout.xaxis.axis_type = Some("category".to_string());

        PlotlyChart {
            data: vec![bars, cumulative],
            layout,
        }
    }
}

/// Format a load-profile report in the requested output format
pub fn format_load_profile(report: &LoadProfileReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&report.to_plotly_chart()),
        OutputFormat::Html => render_standalone_html(
            &format!("Part-Load Distribution - {}", report.metadata.name),
            &report.to_plotly_chart(),
        ),
        OutputFormat::Console => {
            let dist = &report.distribution;
            let mut output = String::new();

            output.push_str("\n=== PART-LOAD DISTRIBUTION ===\n\n");
            output.push_str(&format!("Series: {}\n", report.metadata.name));
            output.push_str(&format!(
                "Design Capacity: {} MBH ({} bins of {} MBH)\n",
                format_mbh(dist.design_capacity),
                dist.bin_count,
                format_mbh(dist.bin_width)
            ));
            output.push_str(&format!(
                "Samples Binned: {}\n",
                format_number(dist.included_count())
            ));
            output.push_str(&format!(
                "Max Actual Load: {} MBH\n",
                format_mbh(dist.max_load)
            ));
            output.push_str(&format!(
                "Total Binned Load: {} MBH\n",
                format_mbh(dist.total_load)
            ));
            if let Some(hours) = dist.total_operating_hours {
                output.push_str(&format!("Operating Hours: {}\n", format_mbh(hours)));
            }
            if let Some(intensity) = &report.intensity {
                output.push_str(&format!(
                    "Heating Intensity: {} Btu/sf design, {} Btu/sf actual\n",
                    intensity.design_btu_per_sf, intensity.actual_btu_per_sf
                ));
            }
            output.push('\n');

            // Bin table
            let has_hours = dist.cumulative_percent_of_operating_hours.is_some();
            if has_hours {
                output.push_str(&format!(
                    "  {:<8} {:<16} │ {:>8} │ {:>12} │ {:>10} │ {:>10} │\n",
                    "Bin", "Range", "Samples", "Load (MBH)", "Cum Load", "Cum Hours"
                ));
                output.push_str(
                    "  ─────────────────────────┼──────────┼──────────────┼────────────┼────────────┤\n",
                );
            } else {
                output.push_str(&format!(
                    "  {:<8} {:<16} │ {:>8} │ {:>12} │ {:>10} │\n",
                    "Bin", "Range", "Samples", "Load (MBH)", "Cum Load"
                ));
                output.push_str(
                    "  ─────────────────────────┼──────────┼──────────────┼────────────┤\n",
                );
            }

            for i in 0..dist.bin_count {
                let label = report.percent_label(i);
                let range = report.range_label(i);
                let cum_load = dist.cumulative_percent_of_total_load[i];
                if let Some(cum_hours) = &dist.cumulative_percent_of_operating_hours {
                    output.push_str(&format!(
                        "  {:<8} {:<16} │ {:>8} │ {:>12} │ {:>9.1}% │ {:>9.1}% │\n",
                        label,
                        range,
                        format_number(dist.bin_counts[i]),
                        format_mbh(dist.bin_totals[i]),
                        cum_load,
                        cum_hours[i]
                    ));
                } else {
                    output.push_str(&format!(
                        "  {:<8} {:<16} │ {:>8} │ {:>12} │ {:>9.1}% │\n",
                        label,
                        range,
                        format_number(dist.bin_counts[i]),
                        format_mbh(dist.bin_totals[i]),
                        cum_load
                    ));
                }
            }
            output.push('\n');

            // Out-of-range samples are a data-quality signal worth surfacing
            if dist.has_excluded_samples() {
                output.push_str("EXCLUDED SAMPLES:\n");
                if dist.excluded_below_zero.count > 0 {
                    output.push_str(&format!(
                        "  No load / below zero: {} samples ({} MBH)\n",
                        format_number(dist.excluded_below_zero.count),
                        format_mbh(dist.excluded_below_zero.total)
                    ));
                }
                if dist.excluded_above_capacity.count > 0 {
                    output.push_str(&format!(
                        "  Above design capacity: {} samples ({} MBH) - check the design figure\n",
                        format_number(dist.excluded_above_capacity.count),
                        format_mbh(dist.excluded_above_capacity.total)
                    ));
                }
                output.push('\n');
            }

            Ok(output)
        }
    }
}
