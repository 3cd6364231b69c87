//! Physical Constants for the NTC Model

/// Offset between Celsius and Kelvin (K).
///
/// `T(K) = T(°C) + 273.15`
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Lowest integer Celsius temperature that is still above absolute zero.
pub const MIN_VALID_TEMP_C: i32 = -273;

/// Calibration temperature of NTC datasheets (°C).
///
/// `R0` is the resistance measured at this temperature. Almost every
/// thermistor datasheet quotes `R25`.
pub const CALIBRATION_TEMP_C: f64 = 25.0;

/// Calibration temperature of NTC datasheets (K).
pub const CALIBRATION_TEMP_K: f64 = CALIBRATION_TEMP_C + KELVIN_OFFSET;
