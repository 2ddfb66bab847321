//! Statistical analysis of load series
//!
//! The distribution binner is the core of the tool: a pure function from a
//! load series and a design capacity to binned/cumulative statistics. The
//! intensity analyser derives the Btu/sf figures shown alongside the chart.

pub mod distribution;
pub mod intensity;

pub use distribution::LoadDistributionBinner;
pub use intensity::{HeatingIntensityAnalyser, IntensityMetrics};
