//! CSV load-profile reader
//!
//! Reads `timestamp,load_mbh` rows exported from the load-profile
//! spreadsheets. The timestamp column is optional; design metadata comes
//! from the caller since spreadsheet metadata ranges do not survive a CSV
//! export.

use super::LoadSeriesSource;
use crate::errors::{AppError, AppResult};
use crate::types::load::{LoadSample, LoadSeries, SeriesMetadata};
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

/// One data row of a load-profile CSV
#[derive(Debug, Deserialize)]
struct CsvLoadRecord {
    #[serde(default, alias = "Timestamp", alias = "time")]
    timestamp: Option<String>,
    #[serde(rename = "load_mbh", alias = "load", alias = "Load (MBH)")]
    load: f64,
}

/// Timestamp formats accepted in the timestamp column
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// CSV-backed load series source
pub struct CsvLoadSource {
    path: PathBuf,
    metadata: SeriesMetadata,
}

impl CsvLoadSource {
    pub fn new(path: impl Into<PathBuf>, metadata: SeriesMetadata) -> Self {
        Self {
            path: path.into(),
            metadata,
        }
    }

    fn parse_timestamp(raw: &str, line: usize) -> AppResult<NaiveDateTime> {
        for format in TIMESTAMP_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(parsed);
            }
        }
        Err(AppError::InvalidRecord {
            line,
            reason: format!("unparseable timestamp '{}'", raw),
        })
    }
}

impl LoadSeriesSource for CsvLoadSource {
    fn load_series(&self) -> AppResult<LoadSeries> {
        let file = File::open(&self.path)?;
        let buf_reader = BufReader::new(file);
        let mut csv_reader = ReaderBuilder::new()
            .comment(Some(b'#')) // Skip lines starting with #
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(buf_reader);

        let mut samples = Vec::new();
        for (row_idx, result) in csv_reader.deserialize::<CsvLoadRecord>().enumerate() {
            // Header occupies line 1
            let line = row_idx + 2;
            let record = result.map_err(|e| AppError::InvalidRecord {
                line,
                reason: e.to_string(),
            })?;

            let timestamp = match record.timestamp.as_deref() {
                Some(raw) if !raw.is_empty() => Some(Self::parse_timestamp(raw, line)?),
                _ => None,
            };
            samples.push(LoadSample {
                timestamp,
                load: record.load,
            });
        }

        info!(
            "Read {} load samples from {}",
            samples.len(),
            self.path.display()
        );

        Ok(LoadSeries {
            metadata: self.metadata.clone(),
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn metadata() -> SeriesMetadata {
        SeriesMetadata {
            name: "Test Bldg".to_string(),
            design_capacity_mbh: 100.0,
            gross_floor_area_sf: None,
        }
    }

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_timestamped_rows() {
        let file = write_csv(
            "timestamp,load_mbh\n\
             2022-01-01 00:00:00,12.5\n\
             2022-01-01 01:00:00,80\n",
        );
        let series = CsvLoadSource::new(file.path(), metadata())
            .load_series()
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.samples[0].load, 12.5);
        assert!(series.samples[0].timestamp.is_some());
    }

    #[test]
    fn test_reads_untimestamped_rows_and_comments() {
        let file = write_csv(
            "# exported from the heat load workbook\n\
             load_mbh\n\
             5\n\
             10.25\n",
        );
        let series = CsvLoadSource::new(file.path(), metadata())
            .load_series()
            .unwrap();

        assert_eq!(series.len(), 2);
        assert!(series.samples.iter().all(|s| s.timestamp.is_none()));
        assert_eq!(series.samples[1].load, 10.25);
    }

    #[test]
    fn test_malformed_row_reports_line_number() {
        let file = write_csv(
            "timestamp,load_mbh\n\
             2022-01-01 00:00:00,12.5\n\
             2022-01-01 01:00:00,not-a-number\n",
        );
        let err = CsvLoadSource::new(file.path(), metadata())
            .load_series()
            .unwrap_err();

        match err {
            AppError::InvalidRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let file = write_csv(
            "timestamp,load_mbh\n\
             yesterday,12.5\n",
        );
        let err = CsvLoadSource::new(file.path(), metadata())
            .load_series()
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRecord { line: 2, .. }));
    }
}
