//! Beta-Parameter Model of an NTC Thermistor
//!
//! ## Physics Background
//!
//! An NTC (negative temperature coefficient) thermistor's resistance falls
//! roughly exponentially as it warms up. Datasheets characterise it with two
//! numbers: `R0`, the resistance at a calibration temperature (almost always
//! 25°C), and `β`, a material constant. Between them:
//!
//! ```text
//! R(T) = R0 × exp(β × (1/T − 1/T_cal))
//!
//! Where:
//! - T     = temperature (K)
//! - T_cal = calibration temperature (K), 298.15 K for R25 parts
//! - R0    = resistance at T_cal (any unit, the result uses the same one)
//! - β     = beta constant (K)
//! ```
//!
//! It is a two-point fit, so accuracy degrades far from `T_cal`. The
//! thermostat only cares about roughly -25°C to +25°C, where it is fine.

use crate::constants::physics::{CALIBRATION_TEMP_K, KELVIN_OFFSET};

/// NTC thermistor described by its base resistance and beta constant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NtcModel {
    /// Resistance at the calibration temperature
    r0: f64,
    /// Beta constant (K)
    beta: f64,
    /// Temperature `r0` was measured at (K)
    calibration_kelvin: f64,
}

impl NtcModel {
    /// Thermistor calibrated at 25°C
    pub fn new(r0: f64, beta: f64) -> Self {
        Self {
            r0,
            beta,
            calibration_kelvin: CALIBRATION_TEMP_K,
        }
    }

    /// Use a different calibration temperature for `r0`
    pub fn with_calibration_celsius(mut self, celsius: f64) -> Self {
        self.calibration_kelvin = celsius + KELVIN_OFFSET;
        self
    }

    /// Base resistance
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Beta constant (K)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Calibration temperature (K)
    pub fn calibration_kelvin(&self) -> f64 {
        self.calibration_kelvin
    }

    /// Resistance at `kelvin`, in the unit of `r0`
    ///
    /// Only meaningful for `kelvin > 0`.
    pub fn resistance_at_kelvin(&self, kelvin: f64) -> f64 {
        self.r0 * libm::exp(self.beta * (1.0 / kelvin - 1.0 / self.calibration_kelvin))
    }

    /// Resistance at `celsius`, in the unit of `r0`
    pub fn resistance_at_celsius(&self, celsius: f64) -> f64 {
        self.resistance_at_kelvin(celsius + KELVIN_OFFSET)
    }
}
