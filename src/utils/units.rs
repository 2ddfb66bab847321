//! Unit conversions for HVAC quantities
//!
//! MBH is thousands of Btu per hour; EPW weather files carry SI units that
//! reports convert to IP for US engineering audiences.

/// MBH expressed as Btu/h
#[inline]
pub fn mbh_to_btu_per_hour(mbh: f64) -> f64 {
    mbh * 1000.0
}

#[inline]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Pascals to inches of mercury
#[inline]
pub fn pascals_to_inhg(pa: f64) -> f64 {
    pa / 3386.389
}

/// Metres per second to miles per hour
#[inline]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * 2.236_936
}

/// Watt-hours per square metre to Btu per square foot
#[inline]
pub fn wh_m2_to_btu_ft2(wh_m2: f64) -> f64 {
    wh_m2 * 0.316_998
}
