//! HVAC Heat Load Profile Analyser
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod report;
pub mod source;
pub mod types;
pub mod utils;
