//! Shared helpers for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use heat_load_analyser::types::load::{LoadSample, SeriesMetadata};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn metadata(name: &str, design_mbh: f64) -> SeriesMetadata {
    SeriesMetadata {
        name: name.to_string(),
        design_capacity_mbh: design_mbh,
        gross_floor_area_sf: None,
    }
}

/// Untimestamped samples from raw load values
pub fn samples(loads: &[f64]) -> Vec<LoadSample> {
    loads.iter().map(|&l| LoadSample::new(l)).collect()
}

/// Hourly samples starting 2022-01-01 00:00
pub fn hourly_samples(loads: &[f64]) -> Vec<LoadSample> {
    loads
        .iter()
        .enumerate()
        .map(|(i, &l)| LoadSample::at(base_time() + chrono::Duration::hours(i as i64), l))
        .collect()
}

pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Write content to a named temp file and return its handle
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// A minimal but well-formed EPW file with three hourly records
pub fn sample_epw() -> String {
    let mut epw = String::from(
        "LOCATION,Denver Intl AP,CO,USA,TMY3,725650,39.83,-104.65,-7.0,1650.0\n\
         DESIGN CONDITIONS,0\n\
         TYPICAL/EXTREME PERIODS,0\n\
         GROUND TEMPERATURES,0\n\
         HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\n\
         COMMENTS 1,integration test fixture\n\
         COMMENTS 2,\n\
         DATA PERIODS,1,1,Data,Saturday, 1/ 1,12/31\n",
    );
    let rows = [
        (1, -5.0, -9.0, 73.0, 83500.0, 0.0, 0.0, 0.0, 180.0, 2.5),
        (2, -5.5, -9.2, 75.0, 83490.0, 0.0, 0.0, 0.0, 185.0, 3.0),
        (3, -6.0, -9.5, 76.0, 83480.0, 0.0, 0.0, 0.0, 190.0, 3.5),
    ];
    for (hour, db, dp, rh, press, ghr, dnr, dhr, wdir, wspd) in rows {
        epw.push_str(&format!(
            "2022,1,1,{},0,?9?9?9?9,{},{},{},{},0,0,300,{},{},{},999999,999999,999999,9999,{},{}\n",
            hour, db, dp, rh, press, ghr, dnr, dhr, wdir, wspd
        ));
    }
    epw
}
