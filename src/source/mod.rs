//! Load-series sources
//!
//! Every input format sits behind the same capability: something that yields
//! an ordered load series and its metadata. The binning core never knows
//! whether the numbers came from a spreadsheet export or a weather file.

pub mod csv;
pub mod epw;

pub use csv::CsvLoadSource;
pub use epw::{EpwFieldSource, EpwReader};

use crate::errors::AppResult;
use crate::types::load::LoadSeries;

/// A source that yields an ordered load series and metadata
pub trait LoadSeriesSource {
    fn load_series(&self) -> AppResult<LoadSeries>;
}
