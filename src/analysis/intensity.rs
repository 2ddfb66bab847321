//! Heating intensity metrics
//!
//! Btu per square foot figures comparing the nameplate design capacity with
//! the highest load the series actually reached. Shown in the chart's stats
//! box and the console summary.

use crate::errors::{AppError, AppResult};
use crate::utils::math::round2;
use crate::utils::units::mbh_to_btu_per_hour;
use serde::{Deserialize, Serialize};

/// Design vs actual heating intensity, Btu/sf, rounded to 2 dp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityMetrics {
    pub design_btu_per_sf: f64,
    pub actual_btu_per_sf: f64,
}

/// Heating intensity analyser
pub struct HeatingIntensityAnalyser;

impl HeatingIntensityAnalyser {
    /// Derive intensity metrics from design capacity, peak load and floor area
    ///
    /// # Arguments
    /// * `design_capacity_mbh` - nameplate capacity, MBH
    /// * `max_load_mbh` - highest observed load, MBH
    /// * `gross_floor_area_sf` - gross floor area, square feet; must be positive
    pub fn analyse(
        design_capacity_mbh: f64,
        max_load_mbh: f64,
        gross_floor_area_sf: f64,
    ) -> AppResult<IntensityMetrics> {
        if !gross_floor_area_sf.is_finite() || gross_floor_area_sf <= 0.0 {
            return Err(AppError::InvalidConfig(format!(
                "gross floor area must be a positive number, got {}",
                gross_floor_area_sf
            )));
        }

        Ok(IntensityMetrics {
            design_btu_per_sf: round2(
                mbh_to_btu_per_hour(design_capacity_mbh) / gross_floor_area_sf,
            ),
            actual_btu_per_sf: round2(mbh_to_btu_per_hour(max_load_mbh) / gross_floor_area_sf),
        })
    }
}
