//! End-to-end pipeline tests: CSV file through binning to formatted reports.

mod common;

use common::{metadata, temp_file};
use heat_load_analyser::analysis::distribution::LoadDistributionBinner;
use heat_load_analyser::analysis::intensity::HeatingIntensityAnalyser;
use heat_load_analyser::errors::AppError;
use heat_load_analyser::report::{format_load_profile, LoadProfileReport, OutputFormat};
use heat_load_analyser::source::{CsvLoadSource, LoadSeriesSource};
use heat_load_analyser::types::distribution::BinningConfig;

fn hourly_csv(loads: &[f64]) -> String {
    let mut csv = String::from("timestamp,load_mbh\n");
    for (i, load) in loads.iter().enumerate() {
        csv.push_str(&format!("2022-01-01 {:02}:00:00,{}\n", i, load));
    }
    csv
}

#[test]
fn csv_to_console_report() {
    let file = temp_file(&hourly_csv(&[12.0, 37.5, 37.5, 62.0, 99.0]));
    let series = CsvLoadSource::new(file.path(), metadata("Plant A", 100.0))
        .load_series()
        .unwrap();

    let dist = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap();

    // Hourly timestamps were derived, so operating-hours metrics exist
    assert_eq!(dist.total_operating_hours, Some(5.0));
    let cum_hours = dist.cumulative_percent_of_operating_hours.as_ref().unwrap();
    assert!((cum_hours[19] - 100.0).abs() < 1e-9);

    let report = LoadProfileReport::new(series.metadata.clone(), dist, None);
    let text = format_load_profile(&report, &OutputFormat::Console).unwrap();
    assert!(text.contains("Plant A"));
    assert!(text.contains("Cum Hours"));
    assert!(text.contains("Operating Hours: 5.0"));
}

#[test]
fn csv_to_json_report_with_intensity() {
    let file = temp_file(&hourly_csv(&[20.0, 80.0]));
    let series = CsvLoadSource::new(file.path(), metadata("Plant B", 100.0))
        .load_series()
        .unwrap();

    let dist = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap();
    let intensity = HeatingIntensityAnalyser::analyse(100.0, dist.max_load, 10_000.0).unwrap();
    let report = LoadProfileReport::new(series.metadata.clone(), dist, Some(intensity));

    let json = format_load_profile(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metadata"]["name"], "Plant B");
    assert_eq!(value["distribution"]["max_load"], 80.0);
    // 100 MBH * 1000 / 10,000 sf = 10 Btu/sf design
    assert_eq!(value["intensity"]["design_btu_per_sf"], 10.0);
    assert_eq!(value["intensity"]["actual_btu_per_sf"], 8.0);
}

#[test]
fn untimestamped_csv_has_no_hours_metrics() {
    let file = temp_file("load_mbh\n10\n20\n30\n");
    let series = CsvLoadSource::new(file.path(), metadata("Plant C", 100.0))
        .load_series()
        .unwrap();

    let dist = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap();

    assert!(dist.total_operating_hours.is_none());
    assert!(dist.cumulative_hours.is_none());

    let report = LoadProfileReport::new(series.metadata.clone(), dist, None);
    let text = format_load_profile(&report, &OutputFormat::Console).unwrap();
    assert!(!text.contains("Cum Hours"));
}

#[test]
fn irregular_timestamps_are_rejected() {
    let csv = "timestamp,load_mbh\n\
               2022-01-01 00:00:00,10\n\
               2022-01-01 01:00:00,20\n\
               2022-01-01 03:30:00,30\n";
    let file = temp_file(csv);
    let series = CsvLoadSource::new(file.path(), metadata("Plant D", 100.0))
        .load_series()
        .unwrap();

    let err = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap_err();

    match err {
        AppError::IrregularTimeSeries { index, .. } => assert_eq!(index, 2),
        other => panic!("expected IrregularTimeSeries, got {:?}", other),
    }

    // An explicit step bypasses spacing validation
    let dist = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        Some(chrono::Duration::hours(1)),
    )
    .unwrap();
    assert_eq!(dist.total_operating_hours, Some(3.0));
}

#[test]
fn plotly_report_serialises_cleanly() {
    let file = temp_file(&hourly_csv(&[15.0, 45.0, 75.0]));
    let series = CsvLoadSource::new(file.path(), metadata("Plant E", 100.0))
        .load_series()
        .unwrap();
    let dist = LoadDistributionBinner::compute_distribution(
        &series.samples,
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap();
    let report = LoadProfileReport::new(series.metadata.clone(), dist, None);

    let json = format_load_profile(&report, &OutputFormat::Plotly).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["data"].as_array().unwrap().len(), 2);
    assert_eq!(value["data"][0]["type"], "bar");
    assert_eq!(value["layout"]["yaxis2"]["ticksuffix"], "%");
}
