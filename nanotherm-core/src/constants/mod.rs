//! Constants for NanoThermostat tooling
//!
//! Named values used by the model and the table generator. They are
//! defaults only: every function that needs one takes it as a parameter
//! (see [`crate::NtcModel`] and [`crate::TableConfig`]).
//!
//! ## Organization
//!
//! - **Physics**: temperature scale conversion and the NTC calibration point
//! - **Table**: default table range, sampling and firmware storage limits

/// Physical constants for the NTC model.
pub mod physics;

/// Table defaults and limits of the firmware's C representation.
pub mod table;

pub use physics::{CALIBRATION_TEMP_C, CALIBRATION_TEMP_K, KELVIN_OFFSET};

pub use table::{
    DEFAULT_MAX_TEMP_C, DEFAULT_MIN_TEMP_C, DEFAULT_SAMPLE_COUNT, THERMISTOR_MAX_SAMPLES,
};
