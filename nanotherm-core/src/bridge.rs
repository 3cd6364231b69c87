//! Resistor Bridge Sizing for an NTC
//!
//! ## Circuit
//!
//! ```text
//!   Vcc
//!    │
//!   ┌┴┐
//!   │ │ R      fixed resistor (what we solve for)
//!   └┬┘
//!    ├───── Vout
//!   ┌┴┐
//!   │/│ NTC    rmin (hot) .. rmax (cold)
//!   └┬┘
//!    │
//!   GND
//! ```
//!
//! `Vout = Vcc × Rntc / (R + Rntc)`. The swing `Vout(rmax) − Vout(rmin)`
//! is largest for
//!
//! ```text
//! R = sqrt((rmax² × rmin − rmin² × rmax) / (rmax − rmin))
//! ```
//!
//! which simplifies to the geometric mean `sqrt(rmin × rmax)`. It is
//! evaluated as written: for `rmin == rmax` that is `0 / 0` and the result
//! is NaN.
//!
//! None of this tracks units: R comes out in whatever unit rmin and rmax
//! went in.

use crate::errors::{BridgeError, BridgeResult};

/// Fixed resistor maximising the bridge output swing
///
/// Precondition: `rmax != rmin`, both positive. Violations give a NaN or
/// infinite result; use [`BridgeSolution::solve`] to have them reported.
pub fn ideal_resistor(rmin: f64, rmax: f64) -> f64 {
    libm::sqrt((rmax * rmax * rmin - rmin * rmin * rmax) / (rmax - rmin))
}

/// Solved bridge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgeSolution {
    /// NTC resistance at the hot end of the range
    pub rmin: f64,
    /// NTC resistance at the cold end of the range
    pub rmax: f64,
    /// Ideal fixed resistor
    pub ideal: f64,
}

impl BridgeSolution {
    /// Solve for the ideal fixed resistor
    pub fn solve(rmin: f64, rmax: f64) -> BridgeResult<Self> {
        let ideal = ideal_resistor(rmin, rmax);
        if !ideal.is_finite() {
            return Err(BridgeError::Degenerate { rmin, rmax });
        }

        Ok(Self { rmin, rmax, ideal })
    }

    /// Divider built with the ideal resistor and supply `vcc`
    pub fn divider(&self, vcc: f64) -> Divider {
        Divider::new(self.ideal, vcc)
    }
}

/// Two-resistor divider with the NTC as the lower leg
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Divider {
    /// Upper (fixed) resistor
    upper: f64,
    /// Supply voltage
    vcc: f64,
}

impl Divider {
    /// Divider with fixed resistor `upper` across `vcc`
    pub fn new(upper: f64, vcc: f64) -> Self {
        Self { upper, vcc }
    }

    /// Upper (fixed) resistor
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Supply voltage
    pub fn vcc(&self) -> f64 {
        self.vcc
    }

    /// Midpoint voltage with `lower` as the NTC resistance
    pub fn output_voltage(&self, lower: f64) -> f64 {
        self.vcc * lower / (self.upper + lower)
    }

    /// NTC resistance that produces `vout` at the midpoint
    ///
    /// `None` when `vout` reaches the supply, i.e. the NTC is open.
    pub fn lower_resistance(&self, vout: f64) -> Option<f64> {
        if vout >= self.vcc {
            return None;
        }
        Some(self.upper * vout / (self.vcc - vout))
    }

    /// Output span as the NTC moves between `rmin` and `rmax`
    pub fn swing(&self, rmin: f64, rmax: f64) -> f64 {
        libm::fabs(self.output_voltage(rmax) - self.output_voltage(rmin))
    }
}
