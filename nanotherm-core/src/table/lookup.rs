//! Reverse lookup: resistance to temperature
//!
//! Mirrors what the firmware does with a generated table. Rows are ascending
//! in temperature, so for an NTC the resistances are descending. The
//! enclosing pair is found by binary search, then the temperature is
//! interpolated linearly:
//!
//! ```text
//! T = T_cold + (T_warm − T_cold) × (R_cold − R) / (R_cold − R_warm)
//! ```
//!
//! Readings outside the table clamp to the nearest end row.

use super::ThermistorTable;

impl ThermistorTable {
    /// Temperature (°C) for a measured `resistance`, in the table's unit
    ///
    /// Assumes an NTC curve (resistance non-increasing with temperature).
    /// Returns `None` for an empty table or a non-finite reading.
    pub fn temperature_at(&self, resistance: f64) -> Option<f64> {
        if !resistance.is_finite() {
            return None;
        }
        let first = self.samples.first()?;
        let last = self.samples.last()?;

        // First row at or below the reading, i.e. the warm side of the pair
        let idx = self
            .samples
            .partition_point(|sample| sample.resistance as f64 > resistance);

        if idx == 0 {
            if resistance > first.resistance as f64 {
                log_warn!(
                    "Resistance {} above table range, clamped to {}°C",
                    resistance,
                    first.temperature
                );
            }
            return Some(first.temperature as f64);
        }

        if idx == self.samples.len() {
            log_warn!(
                "Resistance {} below table range, clamped to {}°C",
                resistance,
                last.temperature
            );
            return Some(last.temperature as f64);
        }

        let cold = &self.samples[idx - 1];
        let warm = &self.samples[idx];
        let (r_cold, r_warm) = (cold.resistance as f64, warm.resistance as f64);
        let fraction = (r_cold - resistance) / (r_cold - r_warm);

        Some(cold.temperature as f64 + (warm.temperature - cold.temperature) as f64 * fraction)
    }
}
