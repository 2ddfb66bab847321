//! Part-load distribution result types
//!
//! The binning core returns a [`DistributionResult`]: per-bin totals and
//! counts, cumulative arrays ready for 0-100% chart axes, and the
//! out-of-range sample tallies that the surrounding tooling surfaces as a
//! data-quality signal.

use serde::{Deserialize, Serialize};

/// Default number of part-load bins (5% increments of design capacity)
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Bin boundary convention
///
/// The historical scripts disagreed on whether a sample exactly on a bin
/// edge belongs to the bin above or below, and on whether a zero load counts
/// as "no load" or as bin 0. Both conventions are explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    /// Bin i covers `(i*w, (i+1)*w]`. A sample at exactly `k*w` goes to bin
    /// k-1; zero load is excluded as "no load". Canonical default.
    #[default]
    InclusiveUpper,
    /// Bin i covers `[i*w, (i+1)*w)`. Zero load lands in bin 0; a load of
    /// exactly `design_capacity` lands in the last bin.
    InclusiveLower,
}

/// Explicit binning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinningConfig {
    pub bin_count: usize,
    pub edge_policy: EdgePolicy,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            edge_policy: EdgePolicy::default(),
        }
    }
}

impl BinningConfig {
    pub fn with_bin_count(bin_count: usize) -> Self {
        Self {
            bin_count,
            ..Self::default()
        }
    }
}

/// Count and total magnitude of samples routed outside all bins
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcludedSamples {
    pub count: usize,
    pub total: f64,
}

impl ExcludedSamples {
    pub fn record(&mut self, load: f64) {
        self.count += 1;
        self.total += load;
    }
}

/// Binned and cumulative part-load statistics
///
/// All per-bin arrays have exactly `bin_count` elements; the hours arrays are
/// present only when a uniform time step was supplied or derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Nameplate design capacity (100% part-load reference), MBH
    pub design_capacity: f64,
    pub bin_count: usize,
    /// `design_capacity / bin_count`, MBH
    pub bin_width: f64,
    pub edge_policy: EdgePolicy,

    /// Summed load per bin
    pub bin_totals: Vec<f64>,
    /// Sample count per bin
    pub bin_counts: Vec<usize>,
    /// Prefix sums of `bin_totals`, monotone non-decreasing
    pub cumulative_loads: Vec<f64>,
    /// `cumulative_loads` normalised to `total_load`, zero-filled when the
    /// series carries no included load
    pub cumulative_percent_of_total_load: Vec<f64>,
    /// Prefix sums of per-bin operating hours
    pub cumulative_hours: Option<Vec<f64>>,
    pub cumulative_percent_of_operating_hours: Option<Vec<f64>>,

    /// Samples with no load (or negative load, per the edge policy)
    pub excluded_below_zero: ExcludedSamples,
    /// Samples above 100% of design capacity
    pub excluded_above_capacity: ExcludedSamples,

    /// Maximum load over all samples, including out-of-range ones
    pub max_load: f64,
    /// Total load of included (binned) samples - the normalisation base
    pub total_load: f64,
    pub total_operating_hours: Option<f64>,
}

impl DistributionResult {
    /// Number of samples assigned to a bin
    pub fn included_count(&self) -> usize {
        self.bin_counts.iter().sum()
    }

    /// Total load over all samples, including excluded ones
    pub fn grand_total(&self) -> f64 {
        self.total_load + self.excluded_below_zero.total + self.excluded_above_capacity.total
    }

    /// Load interval covered by bin `i`, as `(lower, upper)` in MBH
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        (i as f64 * self.bin_width, (i + 1) as f64 * self.bin_width)
    }

    /// True when any sample fell outside the binnable range
    pub fn has_excluded_samples(&self) -> bool {
        self.excluded_below_zero.count > 0 || self.excluded_above_capacity.count > 0
    }
}
