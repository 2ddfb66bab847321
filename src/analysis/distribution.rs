//! Part-load distribution binning
//!
//! Splits the `[0, design_capacity]` load range into `bin_count` equal-width
//! bins, accumulates load totals and sample counts per bin in a single pass,
//! then derives the cumulative arrays the histogram and load-duration charts
//! plot. Samples outside the binnable range are tallied separately rather
//! than dropped - their presence is a data-quality signal the reports
//! surface to the user.

use crate::errors::{AppError, AppResult};
use crate::types::distribution::{
    BinningConfig, DistributionResult, EdgePolicy, ExcludedSamples,
};
use crate::types::load::LoadSample;
use crate::utils::math::safe_percentage;
use chrono::Duration;

/// Consecutive timestamp deltas may differ from the derived step by at most
/// this much before the series counts as irregular.
const SPACING_TOLERANCE_SECONDS: i64 = 1;

/// Where a sample lands relative to the bin range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleClass {
    /// No load (zero or negative, per the edge policy)
    BelowRange,
    /// Above 100% of design capacity
    AboveRange,
    Bin(usize),
}

/// Load distribution binning engine
///
/// Pure: no I/O, no retained state; every call recomputes from its inputs.
pub struct LoadDistributionBinner;

impl LoadDistributionBinner {
    /// Compute binned and cumulative part-load statistics for a series
    ///
    /// # Arguments
    /// * `samples` - ordered load measurements; may be empty
    /// * `design_capacity` - nameplate 100% load in MBH, must be positive
    /// * `config` - bin count and boundary convention
    /// * `time_step` - fixed per-sample duration for operating-hours metrics;
    ///   when `None`, a uniform step is derived from timestamps if present
    ///
    /// # Returns
    /// * `AppResult<DistributionResult>` - all arrays sized `bin_count`
    ///
    /// An empty series is not an error: every output is zero-filled and the
    /// percentage arrays stay zero rather than dividing by a zero total.
    pub fn compute_distribution(
        samples: &[LoadSample],
        design_capacity: f64,
        config: &BinningConfig,
        time_step: Option<Duration>,
    ) -> AppResult<DistributionResult> {
        if !design_capacity.is_finite() || design_capacity <= 0.0 {
            return Err(AppError::InvalidConfig(format!(
                "design capacity must be a positive number, got {}",
                design_capacity
            )));
        }
        if config.bin_count == 0 {
            return Err(AppError::InvalidConfig(
                "bin count must be at least 1".to_string(),
            ));
        }

        let bin_count = config.bin_count;
        let bin_width = design_capacity / bin_count as f64;

        // Resolve the per-sample duration before touching the data: a
        // caller-supplied step is trusted, a derived one is validated.
        let step_hours = match time_step {
            Some(step) => {
                if step <= Duration::zero() {
                    return Err(AppError::InvalidConfig(format!(
                        "time step must be positive, got {}s",
                        step.num_seconds()
                    )));
                }
                Some(step.num_seconds() as f64 / 3600.0)
            }
            None => Self::derive_step_hours(samples)?,
        };

        let mut bin_totals = vec![0.0f64; bin_count];
        let mut bin_counts = vec![0usize; bin_count];
        let mut excluded_below_zero = ExcludedSamples::default();
        let mut excluded_above_capacity = ExcludedSamples::default();
        let mut max_load = f64::NEG_INFINITY;

        for sample in samples {
            max_load = max_load.max(sample.load);
            match Self::classify(
                sample.load,
                design_capacity,
                bin_width,
                bin_count,
                config.edge_policy,
            ) {
                SampleClass::BelowRange => excluded_below_zero.record(sample.load),
                SampleClass::AboveRange => excluded_above_capacity.record(sample.load),
                SampleClass::Bin(i) => {
                    bin_totals[i] += sample.load;
                    bin_counts[i] += 1;
                }
            }
        }

        let max_load = if samples.is_empty() { 0.0 } else { max_load };
        let total_load: f64 = bin_totals.iter().sum();
        let included_count: usize = bin_counts.iter().sum();

        // Prefix sums over the bins
        let mut cumulative_loads = Vec::with_capacity(bin_count);
        let mut running = 0.0f64;
        for total in &bin_totals {
            running += total;
            cumulative_loads.push(running);
        }
        let cumulative_percent_of_total_load = cumulative_loads
            .iter()
            .map(|c| safe_percentage(*c, total_load))
            .collect();

        let (cumulative_hours, cumulative_percent_of_operating_hours, total_operating_hours) =
            match step_hours {
                Some(step) => {
                    let total_hours = included_count as f64 * step;
                    let mut hours = Vec::with_capacity(bin_count);
                    let mut running = 0.0f64;
                    for count in &bin_counts {
                        running += *count as f64 * step;
                        hours.push(running);
                    }
                    let percents = hours
                        .iter()
                        .map(|h| safe_percentage(*h, total_hours))
                        .collect();
                    (Some(hours), Some(percents), Some(total_hours))
                }
                None => (None, None, None),
            };

        Ok(DistributionResult {
            design_capacity,
            bin_count,
            bin_width,
            edge_policy: config.edge_policy,
            bin_totals,
            bin_counts,
            cumulative_loads,
            cumulative_percent_of_total_load,
            cumulative_hours,
            cumulative_percent_of_operating_hours,
            excluded_below_zero,
            excluded_above_capacity,
            max_load,
            total_load,
            total_operating_hours,
        })
    }

    /// Assign a load value to a bin or an exclusion tally
    fn classify(
        load: f64,
        design_capacity: f64,
        bin_width: f64,
        bin_count: usize,
        policy: EdgePolicy,
    ) -> SampleClass {
        match policy {
            EdgePolicy::InclusiveUpper => {
                // Bins are (i*w, (i+1)*w]: zero is "no load"
                if load <= 0.0 || load.is_nan() {
                    SampleClass::BelowRange
                } else if load > design_capacity {
                    SampleClass::AboveRange
                } else {
                    // ceil(load / w) - 1 puts an exact edge k*w into bin k-1
                    let idx = (load / bin_width).ceil() as usize;
                    SampleClass::Bin(idx.saturating_sub(1).min(bin_count - 1))
                }
            }
            EdgePolicy::InclusiveLower => {
                // Bins are [i*w, (i+1)*w): zero lands in bin 0, a load of
                // exactly design_capacity in the last bin
                if load < 0.0 || load.is_nan() {
                    SampleClass::BelowRange
                } else if load > design_capacity {
                    SampleClass::AboveRange
                } else {
                    let idx = (load / bin_width).floor() as usize;
                    SampleClass::Bin(idx.min(bin_count - 1))
                }
            }
        }
    }

    /// Derive a uniform per-sample step from timestamps
    ///
    /// Returns `Ok(None)` when the series has fewer than two samples or any
    /// sample lacks a timestamp - hours metrics are simply omitted. Returns
    /// `IrregularTimeSeries` when spacing disagrees with the first interval
    /// beyond tolerance, since silently assuming uniformity would corrupt
    /// the operating-hours figures.
    fn derive_step_hours(samples: &[LoadSample]) -> AppResult<Option<f64>> {
        if samples.len() < 2 || samples.iter().any(|s| s.timestamp.is_none()) {
            return Ok(None);
        }

        let timestamps: Vec<_> = samples.iter().filter_map(|s| s.timestamp).collect();
        let step_seconds = (timestamps[1] - timestamps[0]).num_seconds();
        if step_seconds <= 0 {
            return Err(AppError::IrregularTimeSeries {
                expected_seconds: 1,
                found_seconds: step_seconds,
                index: 1,
            });
        }

        for (i, pair) in timestamps.windows(2).enumerate().skip(1) {
            let delta = (pair[1] - pair[0]).num_seconds();
            if (delta - step_seconds).abs() > SPACING_TOLERANCE_SECONDS {
                return Err(AppError::IrregularTimeSeries {
                    expected_seconds: step_seconds,
                    found_seconds: delta,
                    index: i + 1,
                });
            }
        }

        Ok(Some(step_seconds as f64 / 3600.0))
    }
}
