//! Thermistor Lookup Tables
//!
//! ## Motivation
//!
//! The thermostat MCU reads the NTC through a resistor bridge and needs a
//! temperature back. Evaluating `exp()` on an 8-bit part without an FPU is
//! slow and pulls in a large chunk of libm, so the curve is sampled offline
//! and compiled into the firmware as a table of `(°C, resistance)` rows. The
//! firmware then interpolates linearly between rows (see
//! [`ThermistorTable::temperature_at`] for the same algorithm on the host).
//!
//! ## Sampling
//!
//! Tables always cover an inclusive `[min, max]` Celsius range with integer
//! temperatures, strictly ascending. Two ways to place the rows:
//!
//! ```text
//! Step(s):   min, min+s, min+2s, ...   while <= max
//! Count(n):  t_i = min + floor(i × (max − min) / (n − 1)),  i = 0..n
//! ```
//!
//! `Count` always lands on both `min` and `max`. `Step` lands on `max` only
//! when `s` divides the span.
//!
//! ## Table Size
//!
//! The firmware reserves a fixed number of rows per curve. Tables longer than
//! [`TableConfig::max_samples`] are still produced; a warning is logged so
//! the operator can widen the step or edit the generated file by hand.
//! Rows that overflow the firmware's `int8_t` / `uint16_t` fields are
//! reported the same way.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{
    constants::{
        physics::MIN_VALID_TEMP_C,
        table::{
            DEFAULT_MAX_TEMP_C, DEFAULT_MIN_TEMP_C, DEFAULT_SAMPLE_COUNT, MAX_RESISTANCE,
            STORED_RESISTANCE_MAX, STORED_TEMP_MAX_C, STORED_TEMP_MIN_C, THERMISTOR_MAX_SAMPLES,
        },
    },
    errors::{ParseUnitError, TableError, TableResult},
    ntc::NtcModel,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

mod lookup;

/// Resistance scale attached to a whole table
///
/// A label only: values are never rescaled. `R0` must already be expressed
/// in the chosen unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResistanceUnit {
    /// Ohms
    Ohms,
    /// Kilo-ohms (10³)
    #[default]
    KiloOhms,
    /// Mega-ohms (10⁶)
    MegaOhms,
}

impl ResistanceUnit {
    /// Every unit, smallest first
    pub const ALL: [ResistanceUnit; 3] = [Self::Ohms, Self::KiloOhms, Self::MegaOhms];

    /// Enumerator of the firmware's `thermistor_resistance_unit_t`
    pub fn c_enumerator(self) -> &'static str {
        match self {
            Self::Ohms => "RESUNIT_OHMS",
            Self::KiloOhms => "RESUNIT_KILOOHMS",
            Self::MegaOhms => "RESUNIT_MEGAOHMS",
        }
    }

    /// Command line spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ohms => "ohms",
            Self::KiloOhms => "kilo-ohms",
            Self::MegaOhms => "mega-ohms",
        }
    }

    /// Short symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ohms => "Ω",
            Self::KiloOhms => "kΩ",
            Self::MegaOhms => "MΩ",
        }
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResistanceUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is_one_of = |names: &[&str]| names.iter().any(|name| name.eq_ignore_ascii_case(s));

        if is_one_of(&["ohms", "ohm"]) {
            Ok(Self::Ohms)
        } else if is_one_of(&["kilo-ohms", "kiloohms", "kohms", "k"]) {
            Ok(Self::KiloOhms)
        } else if is_one_of(&["mega-ohms", "megaohms", "mohms", "m"]) {
            Ok(Self::MegaOhms)
        } else {
            Err(ParseUnitError)
        }
    }
}

/// One table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Temperature (°C)
    pub temperature: i32,
    /// Resistance, truncated toward zero, in the table's unit
    pub resistance: u64,
}

impl Sample {
    /// Evaluate `model` at `celsius`
    ///
    /// Fails when the resistance is not finite or would not fit a signed
    /// 64-bit C literal, which happens a few kelvin above absolute zero.
    pub fn from_model(model: &NtcModel, celsius: i32) -> TableResult<Self> {
        let resistance = model.resistance_at_celsius(celsius as f64);
        if !(0.0..MAX_RESISTANCE).contains(&resistance) {
            return Err(TableError::ResistanceOutOfRange { celsius });
        }

        Ok(Self {
            temperature: celsius,
            // Truncation, not rounding: the firmware stores whole units
            resistance: resistance as u64,
        })
    }

    /// Whether the row fits `thermistor_temp_res_t`
    pub fn fits_firmware_storage(&self) -> bool {
        (STORED_TEMP_MIN_C..=STORED_TEMP_MAX_C).contains(&self.temperature)
            && self.resistance <= STORED_RESISTANCE_MAX
    }
}

/// How rows are placed within the temperature range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Sampling {
    /// Exactly this many rows, evenly spread from min to max
    Count(u32),
    /// One row every this many degrees, starting at min
    Step(u32),
}

impl Default for Sampling {
    fn default() -> Self {
        Self::Count(DEFAULT_SAMPLE_COUNT)
    }
}

/// Table generation parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Lowest temperature (°C), always the first row
    pub min_celsius: i32,
    /// Highest temperature (°C), inclusive
    pub max_celsius: i32,
    /// Row placement
    pub sampling: Sampling,
    /// Unit label for the resistance column
    pub unit: ResistanceUnit,
    /// Row count above which a warning is logged
    pub max_samples: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_celsius: DEFAULT_MIN_TEMP_C,
            max_celsius: DEFAULT_MAX_TEMP_C,
            sampling: Sampling::default(),
            unit: ResistanceUnit::default(),
            max_samples: THERMISTOR_MAX_SAMPLES,
        }
    }
}

impl TableConfig {
    /// Same config over another range
    pub fn with_range(mut self, min_celsius: i32, max_celsius: i32) -> Self {
        self.min_celsius = min_celsius;
        self.max_celsius = max_celsius;
        self
    }

    /// Same config with another row placement
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Same config with another unit label
    pub fn with_unit(mut self, unit: ResistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Check the range and sampling can produce a strictly ascending table
    pub fn validate(&self) -> TableResult<()> {
        if self.min_celsius >= self.max_celsius {
            return Err(TableError::EmptyRange {
                min: self.min_celsius,
                max: self.max_celsius,
            });
        }
        if self.min_celsius < MIN_VALID_TEMP_C {
            return Err(TableError::BelowAbsoluteZero {
                celsius: self.min_celsius,
            });
        }

        match self.sampling {
            Sampling::Step(0) => Err(TableError::ZeroStep),
            Sampling::Step(_) => Ok(()),
            Sampling::Count(count) if count < 2 => Err(TableError::TooFewSamples { count }),
            Sampling::Count(count) => {
                let available = self.span() + 1;
                if u64::from(count) > available {
                    Err(TableError::TooManySamples {
                        count,
                        available: u32::try_from(available).unwrap_or(u32::MAX),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Row temperatures (°C), ascending
    pub fn temperatures(&self) -> TableResult<Vec<i32>> {
        self.validate()?;

        let temps = match self.sampling {
            Sampling::Step(step) => (self.min_celsius..=self.max_celsius)
                .step_by(step as usize)
                .collect(),
            Sampling::Count(count) => {
                let span = i128::from(self.span());
                let last = i128::from(count) - 1;
                let min = i128::from(self.min_celsius);
                (0..i128::from(count))
                    // Offsets are non-negative, so integer division floors.
                    // The sum lies in [min, max] and narrows back losslessly.
                    .map(|i| (min + i * span / last) as i32)
                    .collect()
            }
        };
        Ok(temps)
    }

    fn span(&self) -> u64 {
        (i64::from(self.max_celsius) - i64::from(self.min_celsius)) as u64
    }
}

/// Sampled thermistor curve, ascending in temperature
///
/// The sample count is the row count; there is no separate field that could
/// disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermistorTable {
    samples: Vec<Sample>,
    unit: ResistanceUnit,
}

impl ThermistorTable {
    /// Sample `model` over the range described by `config`
    ///
    /// Fails only on invalid parameters. Oversized tables and rows that
    /// overflow the firmware's field widths are logged and kept.
    pub fn generate(model: &NtcModel, config: &TableConfig) -> TableResult<Self> {
        let samples: Vec<Sample> = config
            .temperatures()?
            .into_iter()
            .map(|celsius| Sample::from_model(model, celsius))
            .collect::<TableResult<_>>()?;

        let table = Self {
            samples,
            unit: config.unit,
        };

        if table.exceeds(config.max_samples) {
            log_warn!(
                "Too many samples in thermistor table: sample count {}, min {}°C, max {}°C (limit {})",
                table.sample_count(),
                config.min_celsius,
                config.max_celsius,
                config.max_samples
            );
        }

        let overflowing = table.storage_overflows();
        if overflowing > 0 {
            log_warn!(
                "{} of {} rows do not fit int8_t/uint16_t storage, consider a larger unit than {}",
                overflowing,
                table.sample_count(),
                table.unit
            );
        }

        Ok(table)
    }

    /// Rows, ascending in temperature
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Unit label of the resistance column
    pub fn unit(&self) -> ResistanceUnit {
        self.unit
    }

    /// Number of rows
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// True if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over rows
    pub fn iter(&self) -> core::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// True if the table has more rows than `limit`
    pub fn exceeds(&self, limit: usize) -> bool {
        self.sample_count() > limit
    }

    /// Number of rows that do not fit the firmware's field widths
    pub fn storage_overflows(&self) -> usize {
        self.samples
            .iter()
            .filter(|sample| !sample.fits_firmware_storage())
            .count()
    }
}

impl<'a> IntoIterator for &'a ThermistorTable {
    type Item = &'a Sample;
    type IntoIter = core::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn ntc_100k() -> NtcModel {
        NtcModel::new(100_000.0, 3950.0)
    }

    #[test]
    fn count_sampling_spans_full_i32_range() {
        let config = TableConfig::default()
            .with_range(-1, i32::MAX)
            .with_sampling(Sampling::Count(2));
        assert_eq!(config.temperatures().unwrap(), vec![-1, i32::MAX]);

        let config = TableConfig::default()
            .with_range(-273, i32::MAX)
            .with_sampling(Sampling::Count(3));
        let temps = config.temperatures().unwrap();
        assert_eq!(temps.first(), Some(&-273));
        assert_eq!(temps.last(), Some(&i32::MAX));
    }

    #[test]
    fn resistance_near_absolute_zero_is_rejected() {
        let config = TableConfig::default()
            .with_range(-273, -270)
            .with_sampling(Sampling::Step(1));
        assert_eq!(
            ThermistorTable::generate(&NtcModel::new(100.0, 3950.0), &config),
            Err(TableError::ResistanceOutOfRange { celsius: -273 })
        );
    }

    #[test]
    fn step_sampling_scenario() {
        let config = TableConfig::default().with_sampling(Sampling::Step(5));
        let table = ThermistorTable::generate(&ntc_100k(), &config).unwrap();

        let temps: Vec<i32> = table.iter().map(|s| s.temperature).collect();
        assert_eq!(temps, vec![-24, -19, -14, -9, -4, 1, 6, 11, 16, 21]);
        assert_eq!(table.samples()[0].resistance, 1_353_851);
        assert_eq!(table.samples()[9].resistance, 119_740);
    }

    #[test]
    fn step_includes_max_when_it_divides_span() {
        let config = TableConfig::default()
            .with_range(0, 20)
            .with_sampling(Sampling::Step(10));
        assert_eq!(config.temperatures().unwrap(), vec![0, 10, 20]);
    }

    #[test]
    fn count_sampling_hits_both_ends() {
        let config = TableConfig::default().with_sampling(Sampling::Count(23));
        let temps = config.temperatures().unwrap();

        assert_eq!(temps.len(), 23);
        assert_eq!(temps.first(), Some(&-24));
        assert_eq!(temps.last(), Some(&25));
        assert!(temps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn count_sampling_floors_offsets() {
        // span 10 over 4 rows: offsets 0, 3.33, 6.67, 10
        let config = TableConfig::default()
            .with_range(0, 10)
            .with_sampling(Sampling::Count(4));
        assert_eq!(config.temperatures().unwrap(), vec![0, 3, 6, 10]);

        // Negative start still floors the offset, not the temperature
        let config = TableConfig::default()
            .with_range(-10, 0)
            .with_sampling(Sampling::Count(4));
        assert_eq!(config.temperatures().unwrap(), vec![-10, -7, -4, 0]);
    }

    #[test]
    fn default_config_is_one_row_per_degree() {
        let temps = TableConfig::default().temperatures().unwrap();
        let expected: Vec<i32> = (-24..=25).collect();
        assert_eq!(temps, expected);
    }

    #[test]
    fn rejects_bad_ranges() {
        let config = TableConfig::default().with_range(10, 10);
        assert_eq!(
            config.validate(),
            Err(TableError::EmptyRange { min: 10, max: 10 })
        );

        let config = TableConfig::default().with_range(-300, 0);
        assert_eq!(
            config.validate(),
            Err(TableError::BelowAbsoluteZero { celsius: -300 })
        );
    }

    #[test]
    fn rejects_bad_sampling() {
        let base = TableConfig::default().with_range(0, 9);

        assert_eq!(
            base.clone().with_sampling(Sampling::Step(0)).validate(),
            Err(TableError::ZeroStep)
        );
        assert_eq!(
            base.clone().with_sampling(Sampling::Count(1)).validate(),
            Err(TableError::TooFewSamples { count: 1 })
        );
        assert_eq!(
            base.clone().with_sampling(Sampling::Count(11)).validate(),
            Err(TableError::TooManySamples {
                count: 11,
                available: 10
            })
        );
        assert!(base.with_sampling(Sampling::Count(10)).validate().is_ok());
    }

    #[test]
    fn oversized_table_is_still_generated() {
        let config = TableConfig::default()
            .with_range(-40, 125)
            .with_sampling(Sampling::Step(1));
        let table = ThermistorTable::generate(&ntc_100k(), &config).unwrap();

        assert_eq!(table.sample_count(), 166);
        assert!(table.exceeds(config.max_samples));
    }

    #[test]
    fn storage_overflow_depends_on_unit_scale() {
        let config = TableConfig::default();

        let in_ohms = ThermistorTable::generate(&ntc_100k(), &config).unwrap();
        assert!(in_ohms.storage_overflows() > 0);

        let in_kohms = ThermistorTable::generate(&NtcModel::new(100.0, 3950.0), &config).unwrap();
        assert_eq!(in_kohms.storage_overflows(), 0);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("ohms".parse(), Ok(ResistanceUnit::Ohms));
        assert_eq!("kilo-ohms".parse(), Ok(ResistanceUnit::KiloOhms));
        assert_eq!("KOhms".parse(), Ok(ResistanceUnit::KiloOhms));
        assert_eq!("mega-ohms".parse(), Ok(ResistanceUnit::MegaOhms));
        assert_eq!("furlongs".parse::<ResistanceUnit>(), Err(ParseUnitError));

        for unit in ResistanceUnit::ALL {
            assert_eq!(unit.as_str().parse(), Ok(unit));
        }
    }

    #[test]
    fn unit_enumerators() {
        assert_eq!(ResistanceUnit::KiloOhms.symbol(), "kΩ");
        assert_eq!(ResistanceUnit::Ohms.c_enumerator(), "RESUNIT_OHMS");
        assert_eq!(ResistanceUnit::KiloOhms.c_enumerator(), "RESUNIT_KILOOHMS");
        assert_eq!(ResistanceUnit::MegaOhms.c_enumerator(), "RESUNIT_MEGAOHMS");
    }
}
