//! Core data types for load-profile and weather analysis

pub mod distribution;
pub mod load;
pub mod visualisation;
pub mod weather;

pub use distribution::{BinningConfig, DistributionResult, EdgePolicy, ExcludedSamples};
pub use load::{LoadSample, LoadSeries, SeriesMetadata};
pub use weather::{EpwLocation, WeatherRecord, WeatherSeries};
