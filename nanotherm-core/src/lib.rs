//! NTC thermistor tooling for NanoThermostat
//!
//! Models NTC thermistors with the beta-parameter equation, tabulates them
//! into C lookup tables for the firmware, and sizes the fixed resistor of the
//! voltage divider the NTC sits in.
//!
//! The model, tables and bridge math are `no_std` + `alloc`. Writing the
//! generated sources to disk needs the `std` feature (on by default).
//!
//! ```no_run
//! use nanotherm_core::{NtcModel, TableConfig, ThermistorTable, GeneratedSources};
//!
//! let model = NtcModel::new(100.0, 3950.0);
//! let table = ThermistorTable::generate(&model, &TableConfig::default())?;
//! let sources = GeneratedSources::render("thermistor_ntc_100k_3950K", &table)?;
//!
//! assert_eq!(sources.sample_count(), table.sample_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bridge;
pub mod codegen;
pub mod constants;
pub mod errors;
pub mod ntc;
pub mod table;

// Public API
pub use bridge::{ideal_resistor, BridgeSolution, Divider};
pub use codegen::GeneratedSources;
pub use errors::{
    BridgeError, BridgeResult, CodegenError, CodegenResult, ParseUnitError, TableError,
    TableResult,
};
pub use ntc::NtcModel;
pub use table::{ResistanceUnit, Sample, Sampling, TableConfig, ThermistorTable};

/// Crate version, reported by the tools' `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
