//! Load-series input types
//!
//! A load series is the only thing the binning core consumes: an ordered
//! sequence of load measurements plus the design metadata that normally
//! lives alongside the data in an engineer's spreadsheet.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single load measurement in MBH (thousands of Btu per hour)
///
/// The timestamp is optional; ordering matters only for operating-hours
/// metrics, never for binning itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSample {
    pub timestamp: Option<NaiveDateTime>,
    pub load: f64,
}

impl LoadSample {
    /// An untimestamped measurement
    pub fn new(load: f64) -> Self {
        Self {
            timestamp: None,
            load,
        }
    }

    /// A timestamped measurement
    pub fn at(timestamp: NaiveDateTime, load: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            load,
        }
    }
}

/// Design metadata accompanying a load series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMetadata {
    /// Display name (building, sheet or file name)
    pub name: String,
    /// Nameplate design capacity in MBH - the 100% part-load reference
    pub design_capacity_mbh: f64,
    /// Gross floor area in square feet, when known (enables Btu/sf metrics)
    pub gross_floor_area_sf: Option<f64>,
}

/// An ordered load series with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSeries {
    pub metadata: SeriesMetadata,
    pub samples: Vec<LoadSample>,
}

impl LoadSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
