//! Weather data types for EnergyPlus `.epw` files
//!
//! Holds the site header and the hourly observations the weather report
//! plots. Records keep the file's raw values; [`WeatherSeries::to_ip`]
//! produces the IP-unit view engineers expect in reports.

use crate::utils::units;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Site metadata from the EPW LOCATION header line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpwLocation {
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Hours offset from UTC
    pub time_zone: f64,
    /// Metres above sea level
    pub elevation_m: f64,
}

/// Unit system the record values are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// EPW native units (degC, Pa, m/s, Wh/m2)
    Si,
    /// Converted units (degF, inHg, mph, Btu/h-ft2)
    Ip,
}

/// One hourly weather observation
///
/// Missing values keep the EPW sentinel the file carries (99.9 for
/// temperatures, 9999 for radiation, etc.); the reader does not invent data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub timestamp: NaiveDateTime,
    pub dry_bulb: f64,
    pub dew_point: f64,
    pub relative_humidity: f64,
    pub atmospheric_pressure: f64,
    pub global_horizontal_radiation: f64,
    pub direct_normal_radiation: f64,
    pub diffuse_horizontal_radiation: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

/// Plottable numeric fields of a [`WeatherRecord`], in display order
pub const WEATHER_FIELDS: &[&str] = &[
    "Dry Bulb Temperature",
    "Dew Point Temperature",
    "Relative Humidity",
    "Atmospheric Pressure",
    "Global Horizontal Radiation",
    "Direct Normal Radiation",
    "Diffuse Horizontal Radiation",
    "Wind Direction",
    "Wind Speed",
];

impl WeatherRecord {
    /// Value of a named field, `None` for unknown names
    pub fn field(&self, name: &str) -> Option<f64> {
        match name {
            "Dry Bulb Temperature" => Some(self.dry_bulb),
            "Dew Point Temperature" => Some(self.dew_point),
            "Relative Humidity" => Some(self.relative_humidity),
            "Atmospheric Pressure" => Some(self.atmospheric_pressure),
            "Global Horizontal Radiation" => Some(self.global_horizontal_radiation),
            "Direct Normal Radiation" => Some(self.direct_normal_radiation),
            "Diffuse Horizontal Radiation" => Some(self.diffuse_horizontal_radiation),
            "Wind Direction" => Some(self.wind_direction),
            "Wind Speed" => Some(self.wind_speed),
            _ => None,
        }
    }
}

/// An hourly weather series with its site header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSeries {
    pub location: EpwLocation,
    pub units: UnitSystem,
    pub records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column of values for a named field, `None` for unknown names
    pub fn field_values(&self, name: &str) -> Option<Vec<f64>> {
        // Probe the name once rather than per record
        if self.records.is_empty() && WEATHER_FIELDS.contains(&name) {
            return Some(Vec::new());
        }
        self.records
            .iter()
            .map(|r| r.field(name))
            .collect::<Option<Vec<f64>>>()
    }

    /// Convert all records to IP units (temperatures degF, pressure inHg,
    /// wind mph, radiation Btu/h-ft2); direction and humidity are unitless.
    pub fn to_ip(&self) -> WeatherSeries {
        if self.units == UnitSystem::Ip {
            return self.clone();
        }
        let records = self
            .records
            .iter()
            .map(|r| WeatherRecord {
                timestamp: r.timestamp,
                dry_bulb: units::celsius_to_fahrenheit(r.dry_bulb),
                dew_point: units::celsius_to_fahrenheit(r.dew_point),
                relative_humidity: r.relative_humidity,
                atmospheric_pressure: units::pascals_to_inhg(r.atmospheric_pressure),
                global_horizontal_radiation: units::wh_m2_to_btu_ft2(
                    r.global_horizontal_radiation,
                ),
                direct_normal_radiation: units::wh_m2_to_btu_ft2(r.direct_normal_radiation),
                diffuse_horizontal_radiation: units::wh_m2_to_btu_ft2(
                    r.diffuse_horizontal_radiation,
                ),
                wind_direction: r.wind_direction,
                wind_speed: units::mps_to_mph(r.wind_speed),
            })
            .collect();
        WeatherSeries {
            location: self.location.clone(),
            units: UnitSystem::Ip,
            records,
        }
    }
}
