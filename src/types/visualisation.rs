//! Plotly chart types for data visualisation
//!
//! Shared Plotly types used by the report formatters for generating
//! interactive charts compatible with Plotly.js.

use serde::Serialize;

/// Bar colour for part-load histogram traces
pub const LOAD_BAR_COLOUR: &str = "#00C496";
/// Line colour for cumulative-percentage traces
pub const CUMULATIVE_LINE_COLOUR: &str = "#FB9A2D";

/// Plotly font configuration for titles, labels, and annotations
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Plotly annotation for adding text boxes and labels to charts
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAnnotation {
    pub text: String,
    /// Reference for x position: "paper" (0-1 fraction) or "x" (data coords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    /// Reference for y position: "paper" (0-1 fraction) or "y" (data coords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showarrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borderwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borderpad: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PlotlyFont>,
}

impl PlotlyAnnotation {
    /// Create a statistics box annotation (summary figures on the chart)
    ///
    /// Positioned in paper coordinates with a white background and border,
    /// matching the design-capacity callout on the load-profile figure.
    pub fn stats_box(text: &str, x: f64, y: f64) -> Self {
        Self {
            text: text.to_string(),
            xref: Some("paper".to_string()),
            yref: Some("paper".to_string()),
            x: Some(x),
            y: Some(y),
            showarrow: Some(false),
            align: Some("left".to_string()),
            bgcolor: Some("white".to_string()),
            bordercolor: Some("black".to_string()),
            borderwidth: Some(2),
            borderpad: Some(10),
            font: Some(PlotlyFont {
                family: None,
                size: Some(18),
            }),
        }
    }
}

/// Complete Plotly chart data structure
///
/// Standard format expected by Plotly.js: `{data: [...], layout: {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyTrace>,
    pub layout: PlotlyLayout,
}

/// Plotly trace configuration
///
/// Represents a single data series in the chart.
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PlotlyMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PlotlyLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Plotly marker configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyMarker {
    pub color: String,
}

/// Plotly line configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLine {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Plotly hover label configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHoverLabel {
    /// -1 means show full name without truncation
    pub namelength: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

/// Plotly layout configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<PlotlySecondaryAxis>,
    pub hovermode: String,
    pub hoverlabel: PlotlyHoverLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// Annotations (text boxes, labels, stats boxes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<PlotlyAnnotation>>,
}

/// Plotly title configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PlotlyFont>,
}

/// Plotly axis configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAxis {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fixed axis range (e.g., [0, 100] for percentage axes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<f64>>,
    /// Suffix to append to tick labels (e.g., "%" for percentages)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<String>,
}

impl PlotlyAxis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            axis_type: None,
            color: None,
            range: None,
            ticksuffix: None,
        }
    }
}

/// Plotly secondary axis configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlySecondaryAxis {
    pub title: String,
    pub overlaying: String,
    pub side: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<String>,
}

impl PlotlySecondaryAxis {
    /// Right-hand 0-100% axis for cumulative traces
    pub fn percent(title: &str) -> Self {
        Self {
            title: title.to_string(),
            overlaying: "y".to_string(),
            side: "right".to_string(),
            color: None,
            range: Some(vec![0.0, 100.0]),
            ticksuffix: Some("%".to_string()),
        }
    }
}

impl PlotlyLayout {
    /// Create a basic layout with single y-axis
    pub fn basic(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
                font: None,
            },
            xaxis: PlotlyAxis::titled(x_title),
            yaxis: PlotlyAxis::titled(y_title),
            yaxis2: None,
            hovermode: "x".to_string(),
            hoverlabel: PlotlyHoverLabel {
                namelength: -1,
                bgcolor: Some("white".to_string()),
            },
            showlegend: None,
            annotations: None,
        }
    }

    /// Create a layout with a secondary percentage y-axis
    pub fn dual_axis(title: &str, x_title: &str, y1_title: &str, y2_title: &str) -> Self {
        let mut layout = Self::basic(title, x_title, y1_title);
        layout.yaxis2 = Some(PlotlySecondaryAxis::percent(y2_title));
        layout
    }

    /// Add annotations to the layout
    pub fn with_annotations(mut self, annotations: Vec<PlotlyAnnotation>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Force the legend on, even for single-trace charts
    pub fn with_legend(mut self) -> Self {
        self.showlegend = Some(true);
        self
    }
}

impl PlotlyTrace {
    /// Create a bar trace
    pub fn bar(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "bar".to_string(),
            mode: None,
            yaxis: None,
            marker: Some(PlotlyMarker {
                color: color.to_string(),
            }),
            line: None,
            visible: None,
            hovertemplate: None,
        }
    }

    /// Create a line trace
    pub fn line(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "scatter".to_string(),
            mode: Some("lines+markers".to_string()),
            yaxis: None,
            marker: None,
            line: Some(PlotlyLine {
                color: color.to_string(),
                width: None,
            }),
            visible: None,
            hovertemplate: None,
        }
    }

    /// Set this trace to use the secondary y-axis
    pub fn on_secondary_axis(mut self) -> Self {
        self.yaxis = Some("y2".to_string());
        self
    }

    /// Set this trace to be hidden by default (toggle via legend)
    pub fn hidden_by_default(mut self) -> Self {
        self.visible = Some("legendonly".to_string());
        self
    }

    /// Set a custom hover template
    pub fn with_hovertemplate(mut self, template: &str) -> Self {
        self.hovertemplate = Some(template.to_string());
        self
    }
}
