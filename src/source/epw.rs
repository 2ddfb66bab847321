//! EnergyPlus `.epw` weather file reader
//!
//! An EPW file is line-oriented and comma-separated: a LOCATION line, seven
//! further header lines ending with DATA PERIODS, then one record per hour.
//! Only the fields the weather report plots are retained; everything else in
//! a record is ignored.

use super::LoadSeriesSource;
use crate::errors::{AppError, AppResult};
use crate::types::load::{LoadSample, LoadSeries, SeriesMetadata};
use crate::types::weather::{
    EpwLocation, UnitSystem, WeatherRecord, WeatherSeries, WEATHER_FIELDS,
};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

/// Maximum lines scanned for the end of the header block
const MAX_HEADER_LINES: usize = 30;

/// Minimum comma-separated fields in an hourly record (through wind speed)
const MIN_RECORD_FIELDS: usize = 22;

/// `.epw` weather file reader
pub struct EpwReader {
    path: PathBuf,
}

impl EpwReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full weather series (SI units, as stored in the file)
    pub fn read(&self) -> AppResult<WeatherSeries> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines().enumerate();

        let (_, first_line) = lines
            .next()
            .ok_or_else(|| AppError::EpwParse("file is empty".to_string()))?;
        let location = Self::parse_location(&first_line?)?;

        // Skip the remaining header lines; DATA PERIODS is the last of them
        let mut found_data_periods = false;
        for (line_no, line) in lines.by_ref() {
            let line = line?;
            if line.to_ascii_uppercase().starts_with("DATA PERIODS") {
                found_data_periods = true;
                break;
            }
            if line_no >= MAX_HEADER_LINES {
                break;
            }
        }
        if !found_data_periods {
            return Err(AppError::EpwParse(
                "missing DATA PERIODS header line".to_string(),
            ));
        }

        let mut records = Vec::new();
        for (line_no, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(Self::parse_record(&line, line_no + 1)?);
        }

        info!(
            "Read {} hourly records for {} from {}",
            records.len(),
            location.city,
            self.path.display()
        );

        Ok(WeatherSeries {
            location,
            units: UnitSystem::Si,
            records,
        })
    }

    /// Parse the LOCATION header line
    ///
    /// `LOCATION,city,state,country,source,WMO,lat,lon,tz,elevation`
    fn parse_location(line: &str) -> AppResult<EpwLocation> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.is_empty() || !fields[0].eq_ignore_ascii_case("LOCATION") {
            return Err(AppError::EpwParse(format!(
                "expected LOCATION header, found '{}'",
                fields.first().unwrap_or(&"")
            )));
        }
        if fields.len() < 10 {
            return Err(AppError::EpwParse(format!(
                "LOCATION header has {} fields, expected 10",
                fields.len()
            )));
        }

        Ok(EpwLocation {
            city: fields[1].trim().to_string(),
            state_province: fields[2].trim().to_string(),
            country: fields[3].trim().to_string(),
            latitude: Self::parse_f64(fields[6], "latitude", 1)?,
            longitude: Self::parse_f64(fields[7], "longitude", 1)?,
            time_zone: Self::parse_f64(fields[8], "time zone", 1)?,
            elevation_m: Self::parse_f64(fields[9], "elevation", 1)?,
        })
    }

    /// Parse one hourly record line
    fn parse_record(line: &str, line_no: usize) -> AppResult<WeatherRecord> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_RECORD_FIELDS {
            return Err(AppError::EpwParse(format!(
                "line {}: record has {} fields, expected at least {}",
                line_no,
                fields.len(),
                MIN_RECORD_FIELDS
            )));
        }

        let year = Self::parse_f64(fields[0], "year", line_no)? as i32;
        let month = Self::parse_f64(fields[1], "month", line_no)? as u32;
        let day = Self::parse_f64(fields[2], "day", line_no)? as u32;
        let hour = Self::parse_f64(fields[3], "hour", line_no)? as u32;

        // EPW hours are 1-24 and mark the end of the observation hour
        if !(1..=24).contains(&hour) {
            return Err(AppError::EpwParse(format!(
                "line {}: hour {} outside 1-24",
                line_no, hour
            )));
        }
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| {
                AppError::EpwParse(format!(
                    "line {}: invalid date {}-{}-{}",
                    line_no, year, month, day
                ))
            })?
            .and_hms_opt(hour - 1, 0, 0)
            .ok_or_else(|| AppError::EpwParse(format!("line {}: invalid hour {}", line_no, hour)))?;

        Ok(WeatherRecord {
            timestamp,
            dry_bulb: Self::parse_f64(fields[6], "dry bulb", line_no)?,
            dew_point: Self::parse_f64(fields[7], "dew point", line_no)?,
            relative_humidity: Self::parse_f64(fields[8], "relative humidity", line_no)?,
            atmospheric_pressure: Self::parse_f64(fields[9], "pressure", line_no)?,
            global_horizontal_radiation: Self::parse_f64(fields[13], "global radiation", line_no)?,
            direct_normal_radiation: Self::parse_f64(fields[14], "direct radiation", line_no)?,
            diffuse_horizontal_radiation: Self::parse_f64(
                fields[15],
                "diffuse radiation",
                line_no,
            )?,
            wind_direction: Self::parse_f64(fields[20], "wind direction", line_no)?,
            wind_speed: Self::parse_f64(fields[21], "wind speed", line_no)?,
        })
    }

    fn parse_f64(raw: &str, name: &str, line_no: usize) -> AppResult<f64> {
        raw.trim().parse::<f64>().map_err(|_| {
            AppError::EpwParse(format!(
                "line {}: unparseable {} value '{}'",
                line_no, name, raw
            ))
        })
    }
}

/// A weather-file field exposed as a load series for binning
///
/// Lets the distribution binner run over any numeric EPW column (e.g. a
/// radiation field against a design irradiance) without the binner knowing
/// about weather files.
pub struct EpwFieldSource {
    reader: EpwReader,
    field: String,
    metadata: SeriesMetadata,
}

impl EpwFieldSource {
    pub fn new(path: impl Into<PathBuf>, field: &str, metadata: SeriesMetadata) -> Self {
        Self {
            reader: EpwReader::new(path),
            field: field.to_string(),
            metadata,
        }
    }
}

impl LoadSeriesSource for EpwFieldSource {
    fn load_series(&self) -> AppResult<LoadSeries> {
        if !WEATHER_FIELDS.contains(&self.field.as_str()) {
            return Err(AppError::Config(format!(
                "unknown weather field '{}'; available: {}",
                self.field,
                WEATHER_FIELDS.join(", ")
            )));
        }

        let series = self.reader.read()?;
        let mut samples = Vec::with_capacity(series.len());
        for record in &series.records {
            let value = record.field(&self.field).ok_or_else(|| {
                AppError::Config(format!("weather field '{}' not available", self.field))
            })?;
            samples.push(LoadSample::at(record.timestamp, value));
        }

        Ok(LoadSeries {
            metadata: self.metadata.clone(),
            samples,
        })
    }
}
