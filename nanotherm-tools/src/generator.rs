//! Thermistor table generator
//!
//! ```bash
//! thermistor-generator 100 3950 thermistor_ntc_100k_3950K --step 5
//! ```
//!
//! writes `Generated/thermistor_ntc_100k_3950K.h` and `.c`. Sources are
//! fully rendered before the output directory is touched, so a rejected
//! invocation leaves nothing behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nanotherm_core::{
    constants::{DEFAULT_MAX_TEMP_C, DEFAULT_MIN_TEMP_C, DEFAULT_SAMPLE_COUNT, THERMISTOR_MAX_SAMPLES},
    GeneratedSources, NtcModel, ResistanceUnit, Sampling, TableConfig, ThermistorTable,
};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// Generates thermistor data as a C header + source pair.
///
/// Both files are meant to be compiled into the firmware alongside
/// "thermistor.h".
#[derive(Debug, Parser)]
#[command(
    name = "thermistor-generator",
    version = nanotherm_core::VERSION,
    allow_negative_numbers = true
)]
pub struct GeneratorArgs {
    /// Base resistance of the NTC thermistor (calibrated @25°C), in --unit
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub r0: u32,

    /// β constant of the NTC thermistor (K)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub beta: u32,

    /// Name of the output files and C symbols (e.g. "thermistor_100k_3950K")
    pub name: String,

    /// Lowest table temperature (°C)
    #[arg(long, default_value_t = DEFAULT_MIN_TEMP_C)]
    pub min: i32,

    /// Highest table temperature (°C), inclusive
    #[arg(long, default_value_t = DEFAULT_MAX_TEMP_C)]
    pub max: i32,

    /// Number of rows, evenly spread over [min, max] [default: 50]
    #[arg(long, conflicts_with = "step")]
    pub count: Option<u32>,

    /// Degrees between rows, starting at min
    #[arg(long)]
    pub step: Option<u32>,

    /// Unit label of the resistance column (ohms, kilo-ohms, mega-ohms)
    #[arg(long, default_value_t = ResistanceUnit::KiloOhms)]
    pub unit: ResistanceUnit,

    /// Row count above which a warning is printed
    #[arg(long, default_value_t = THERMISTOR_MAX_SAMPLES)]
    pub max_samples: usize,

    /// Directory receiving the generated files, relative to the working directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,
}

impl GeneratorArgs {
    /// Thermistor described by the positional arguments
    pub fn model(&self) -> NtcModel {
        NtcModel::new(f64::from(self.r0), f64::from(self.beta))
    }

    /// Table parameters described by the options
    pub fn table_config(&self) -> TableConfig {
        let sampling = match self.step {
            Some(step) => Sampling::Step(step),
            None => Sampling::Count(self.count.unwrap_or(DEFAULT_SAMPLE_COUNT)),
        };

        TableConfig {
            min_celsius: self.min,
            max_celsius: self.max,
            sampling,
            unit: self.unit,
            max_samples: self.max_samples,
        }
    }
}

/// Files written by [`run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Path of `<name>.h`
    pub header: PathBuf,
    /// Path of `<name>.c`
    pub source: PathBuf,
    /// Rows in the table
    pub sample_count: usize,
}

/// Generate the table and write both files
pub fn run(args: &GeneratorArgs) -> Result<Generated> {
    let model = args.model();
    let config = args.table_config();

    tracing::info!("Generating thermistor data");
    tracing::debug!(?model, ?config, "Table parameters");
    let table = ThermistorTable::generate(&model, &config).context("Invalid table parameters")?;

    tracing::info!("Rendering header and source files");
    let sources = GeneratedSources::render(&args.name, &table).context("Invalid table name")?;

    let (header, source) = sources.write_to(&args.output_dir).with_context(|| {
        format!(
            "Failed to write generated sources to {}",
            args.output_dir.display()
        )
    })?;
    tracing::debug!(header = %header.display(), source = %source.display(), "Files written");

    Ok(Generated {
        header,
        source,
        sample_count: sources.sample_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GeneratorArgs {
        let argv = std::iter::once("thermistor-generator").chain(args.iter().copied());
        GeneratorArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["100", "3950", "ntc_100k"]);
        assert_eq!(args.table_config(), TableConfig::default());
        assert_eq!(args.output_dir, PathBuf::from("Generated"));
        assert_eq!(args.model(), NtcModel::new(100.0, 3950.0));
    }

    #[test]
    fn negative_bounds_and_step() {
        let args = parse(&["100", "3950", "ntc", "--min", "-40", "--max", "-10", "--step", "5"]);
        let config = args.table_config();
        assert_eq!(config.min_celsius, -40);
        assert_eq!(config.max_celsius, -10);
        assert_eq!(config.sampling, Sampling::Step(5));
    }

    #[test]
    fn unit_option() {
        let args = parse(&["4700", "3950", "ntc", "--unit", "ohms"]);
        assert_eq!(args.table_config().unit, ResistanceUnit::Ohms);
    }

    #[test]
    fn count_and_step_conflict() {
        let argv = ["thermistor-generator", "100", "3950", "ntc", "--count", "10", "--step", "5"];
        assert!(GeneratorArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn rejects_non_integer_and_missing_arguments() {
        assert!(GeneratorArgs::try_parse_from(["thermistor-generator", "100k", "3950", "ntc"]).is_err());
        assert!(GeneratorArgs::try_parse_from(["thermistor-generator", "100", "3950"]).is_err());
        assert!(GeneratorArgs::try_parse_from(["thermistor-generator", "0", "3950", "ntc"]).is_err());
        assert!(
            GeneratorArgs::try_parse_from(["thermistor-generator", "100", "3950", "ntc", "extra"])
                .is_err()
        );
    }

    #[test]
    fn run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Generated");
        let mut args = parse(&["100", "3950", "thermistor_ntc_100k_3950K", "--step", "5"]);
        args.output_dir = out.clone();

        let generated = run(&args).unwrap();
        assert_eq!(generated.sample_count, 10);
        assert_eq!(generated.header, out.join("thermistor_ntc_100k_3950K.h"));
        assert_eq!(generated.source, out.join("thermistor_ntc_100k_3950K.c"));

        let source = std::fs::read_to_string(&generated.source).unwrap();
        assert!(source.contains("{-24, 1353},"));
        assert!(source.contains("{21, 119}\n"));
    }

    #[test]
    fn run_rejects_bad_name_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Generated");
        let mut args = parse(&["100", "3950", "ntc-100k"]);
        args.output_dir = out.clone();

        assert!(run(&args).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn run_rejects_bad_range_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Generated");
        let mut args = parse(&["100", "3950", "ntc", "--min", "30", "--max", "20"]);
        args.output_dir = out.clone();

        assert!(run(&args).is_err());
        assert!(!out.exists());
    }
}
