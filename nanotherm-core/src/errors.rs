//! Error Types for Table Generation, Code Generation and Bridge Solving
//!
//! Errors are small and mostly `Copy` so they can be returned from the
//! numeric code without allocation. The only owned payload is the rejected
//! symbol name in [`CodegenError`].
//!
//! ## Error Categories
//!
//! ### Range Checks
//! - [`TableError`]: the requested temperature range or sampling cannot
//!   produce a strictly ascending table, or the curve leaves the range a C
//!   literal can hold
//!
//! ### Rendering
//! - [`CodegenError`]: the table name is not usable as a C identifier
//!
//! ### Bridge Math
//! - [`BridgeError`]: the bridge formula produced no finite value
//!   (`rmin == rmax`, or inputs of opposite sign)
//!
//! Oversized tables are not an error: they are logged as a
//! warning and generation goes on.

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for table generation
pub type TableResult<T> = Result<T, TableError>;

/// Result type for C source rendering
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Result type for bridge solving
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Invalid table parameters
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Range is empty or reversed
    #[error("Temperature min {min}°C must be less than max {max}°C")]
    EmptyRange {
        /// Requested lower bound (°C)
        min: i32,
        /// Requested upper bound (°C)
        max: i32,
    },

    /// Lower bound would put the table at or below 0 K
    #[error("Temperature {celsius}°C is at or below absolute zero")]
    BelowAbsoluteZero {
        /// Offending temperature (°C)
        celsius: i32,
    },

    /// Step sampling with a zero step
    #[error("Temperature step must be positive")]
    ZeroStep,

    /// Count sampling cannot reach both ends of the range
    #[error("Sample count {count} is too small, need at least 2")]
    TooFewSamples {
        /// Requested sample count
        count: u32,
    },

    /// Count sampling would repeat temperatures
    #[error("Sample count {count} exceeds the {available} distinct temperatures in range")]
    TooManySamples {
        /// Requested sample count
        count: u32,
        /// Integer temperatures available in [min, max]
        available: u32,
    },

    /// Model resistance is not representable in a C table
    #[error("Resistance at {celsius}°C is too large to tabulate")]
    ResistanceOutOfRange {
        /// Temperature of the first offending row (°C)
        celsius: i32,
    },
}

/// C source rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Name cannot be used for the generated symbols and file names
    #[error("\"{0}\" is not a valid C identifier")]
    InvalidName(String),
}

/// Bridge solving errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BridgeError {
    /// Formula has no finite solution for these inputs
    #[error("No finite bridge resistor for rmin={rmin}, rmax={rmax}")]
    Degenerate {
        /// Minimum NTC resistance given
        rmin: f64,
        /// Maximum NTC resistance given
        rmax: f64,
    },
}

/// Unrecognised resistance unit name
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown resistance unit (expected ohms, kilo-ohms or mega-ohms)")]
pub struct ParseUnitError;
