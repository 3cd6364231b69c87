//! Table Defaults and Firmware Storage Limits
//!
//! The firmware declares thermistor curves as
//!
//! ```text
//! typedef struct {
//!     int8_t   temperature;
//!     uint16_t resistance;
//! } thermistor_temp_res_t;
//!
//! typedef struct {
//!     thermistor_temp_res_t data[THERMISTOR_MAX_SAMPLES];
//!     thermistor_resistance_unit_t unit;
//!     uint8_t sample_count;
//! } thermistor_data_t;
//! ```
//!
//! so a generated table should fit those field widths and that row count.
//! Exceeding them is reported, not refused.

/// Default lower bound of the table (°C).
///
/// Coldest temperature the thermostat is expected to report.
pub const DEFAULT_MIN_TEMP_C: i32 = -24;

/// Default upper bound of the table (°C).
pub const DEFAULT_MAX_TEMP_C: i32 = 25;

/// Default number of rows.
///
/// One row per degree over the default range, which fills the firmware
/// array exactly.
pub const DEFAULT_SAMPLE_COUNT: u32 = 50;

/// Row capacity of `thermistor_data_t::data` in the firmware.
pub const THERMISTOR_MAX_SAMPLES: usize = 50;

/// Firmware header declaring `thermistor_data_t`.
pub const THERMISTOR_TYPES_HEADER: &str = "thermistor.h";

/// Range of `thermistor_temp_res_t::temperature` (`int8_t`).
pub const STORED_TEMP_MIN_C: i32 = i8::MIN as i32;

/// Range of `thermistor_temp_res_t::temperature` (`int8_t`).
pub const STORED_TEMP_MAX_C: i32 = i8::MAX as i32;

/// Largest value of `thermistor_temp_res_t::resistance` (`uint16_t`).
pub const STORED_RESISTANCE_MAX: u64 = u16::MAX as u64;

/// Exclusive bound on a generated resistance (2^63).
///
/// Unsuffixed decimal literals above `LLONG_MAX` are not valid C.
pub const MAX_RESISTANCE: f64 = 9_223_372_036_854_775_808.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_fills_firmware_array() {
        let degrees = (DEFAULT_MAX_TEMP_C - DEFAULT_MIN_TEMP_C + 1) as usize;
        assert_eq!(degrees, DEFAULT_SAMPLE_COUNT as usize);
        assert_eq!(degrees, THERMISTOR_MAX_SAMPLES);
    }
}
