//! Property-based tests for the part-load distribution binner.
//!
//! Uses proptest to verify conservation and monotonicity properties hold
//! across many random load series.

mod common;

use common::samples;
use heat_load_analyser::analysis::distribution::LoadDistributionBinner;
use heat_load_analyser::types::distribution::{BinningConfig, EdgePolicy};
use proptest::prelude::*;

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-9;

/// Helper to check approximate equality with relative scaling.
fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol.max(tol * a.abs().max(b.abs()))
}

fn any_loads() -> impl Strategy<Value = Vec<f64>> {
    // Spans below-zero, in-range and above-capacity values
    prop::collection::vec(-50.0..200.0f64, 0..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every sample's load lands in exactly one place: a bin or an
    /// exclusion tally. Totals and counts both balance.
    #[test]
    fn conservation_of_load_and_count(loads in any_loads()) {
        let dist = LoadDistributionBinner::compute_distribution(
            &samples(&loads), 100.0, &BinningConfig::default(), None,
        ).unwrap();

        let binned: f64 = dist.bin_totals.iter().sum();
        let grand = binned + dist.excluded_below_zero.total + dist.excluded_above_capacity.total;
        let input: f64 = loads.iter().sum();
        prop_assert!(approx_eq(grand, input, 1e-6),
            "binned+excluded={} != input total={}", grand, input);

        let counted = dist.included_count()
            + dist.excluded_below_zero.count
            + dist.excluded_above_capacity.count;
        prop_assert_eq!(counted, loads.len());
    }

    /// Cumulative loads are monotone non-decreasing and end at the
    /// included total.
    #[test]
    fn cumulative_loads_monotone(loads in any_loads()) {
        let dist = LoadDistributionBinner::compute_distribution(
            &samples(&loads), 100.0, &BinningConfig::default(), None,
        ).unwrap();

        for pair in dist.cumulative_loads.windows(2) {
            prop_assert!(pair[1] >= pair[0] - TOL);
        }
        prop_assert!(approx_eq(
            *dist.cumulative_loads.last().unwrap(), dist.total_load, 1e-6));
    }

    /// The cumulative percentage curve ends at 100% whenever any load was
    /// binned, and stays zero-filled otherwise.
    #[test]
    fn cumulative_percent_normalised(loads in any_loads()) {
        let dist = LoadDistributionBinner::compute_distribution(
            &samples(&loads), 100.0, &BinningConfig::default(), None,
        ).unwrap();

        let last = *dist.cumulative_percent_of_total_load.last().unwrap();
        if dist.total_load > 0.0 {
            prop_assert!(approx_eq(last, 100.0, 1e-6), "final percent={}", last);
        } else {
            prop_assert!(dist.cumulative_percent_of_total_load.iter().all(|&p| p == 0.0));
        }
        prop_assert!(dist.cumulative_percent_of_total_load.iter().all(|&p| p <= 100.0 + TOL));
    }

    /// All per-bin arrays always have exactly bin_count elements.
    #[test]
    fn array_lengths_match_bin_count(loads in any_loads(), bin_count in 1usize..50) {
        let dist = LoadDistributionBinner::compute_distribution(
            &samples(&loads), 100.0, &BinningConfig::with_bin_count(bin_count), None,
        ).unwrap();

        prop_assert_eq!(dist.bin_totals.len(), bin_count);
        prop_assert_eq!(dist.bin_counts.len(), bin_count);
        prop_assert_eq!(dist.cumulative_loads.len(), bin_count);
        prop_assert_eq!(dist.cumulative_percent_of_total_load.len(), bin_count);
        prop_assert!(approx_eq(dist.bin_width, 100.0 / bin_count as f64, TOL));
    }

    /// A strictly in-range load is binned identically under both edge
    /// policies unless it sits exactly on a bin edge.
    #[test]
    fn edge_policies_agree_off_edges(load in 0.001..99.999f64) {
        prop_assume!((load / 5.0).fract() > 1e-9);

        let upper = LoadDistributionBinner::compute_distribution(
            &samples(&[load]), 100.0,
            &BinningConfig { bin_count: 20, edge_policy: EdgePolicy::InclusiveUpper }, None,
        ).unwrap();
        let lower = LoadDistributionBinner::compute_distribution(
            &samples(&[load]), 100.0,
            &BinningConfig { bin_count: 20, edge_policy: EdgePolicy::InclusiveLower }, None,
        ).unwrap();

        prop_assert_eq!(&upper.bin_counts, &lower.bin_counts);
    }

    /// max_load covers every sample, including excluded ones.
    #[test]
    fn max_load_covers_all_samples(loads in any_loads()) {
        prop_assume!(!loads.is_empty());
        let dist = LoadDistributionBinner::compute_distribution(
            &samples(&loads), 100.0, &BinningConfig::default(), None,
        ).unwrap();

        let expected = loads.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(approx_eq(dist.max_load, expected, TOL));
    }
}

#[test]
fn worked_example_inclusive_upper() {
    // Design 100 MBH, 20 bins of 5 MBH. Zero is "no load", 150 is above
    // capacity, the exact edge 100 lands in the last bin.
    let loads = [0.0, 5.0, 5.0001, 100.0, 150.0, -3.0];
    let dist = LoadDistributionBinner::compute_distribution(
        &samples(&loads),
        100.0,
        &BinningConfig::default(),
        None,
    )
    .unwrap();

    assert_eq!(dist.bin_totals[0], 5.0);
    assert_eq!(dist.bin_counts[0], 1);
    assert_eq!(dist.bin_totals[1], 5.0001);
    assert_eq!(dist.bin_totals[19], 100.0);
    assert_eq!(dist.excluded_below_zero.count, 2);
    assert_eq!(dist.excluded_below_zero.total, -3.0);
    assert_eq!(dist.excluded_above_capacity.count, 1);
    assert_eq!(dist.excluded_above_capacity.total, 150.0);
    assert_eq!(dist.max_load, 150.0);
}

#[test]
fn worked_example_inclusive_lower() {
    // Under the lower-edge convention zero counts as bin 0 and the exact
    // edge 5.0 moves up to bin 1.
    let loads = [0.0, 5.0, 100.0];
    let dist = LoadDistributionBinner::compute_distribution(
        &samples(&loads),
        100.0,
        &BinningConfig {
            bin_count: 20,
            edge_policy: EdgePolicy::InclusiveLower,
        },
        None,
    )
    .unwrap();

    assert_eq!(dist.bin_counts[0], 1);
    assert_eq!(dist.bin_counts[1], 1);
    assert_eq!(dist.bin_counts[19], 1);
    assert_eq!(dist.excluded_below_zero.count, 0);
}
