//! Thermistor table generator
//!
//! Writes `<name>.h` / `<name>.c` tabulating an NTC thermistor curve.
//! Run with `--help` for options.

use anyhow::Result;
use nanotherm_tools::generator::{self, GeneratorArgs};

fn main() -> Result<()> {
    let args: GeneratorArgs = nanotherm_tools::parse_args();
    nanotherm_tools::init_logging(args.verbose);

    let generated = generator::run(&args)?;

    println!(
        "Generated {} samples from {}°C to {}°C, resistance in {}",
        generated.sample_count,
        args.min,
        args.max,
        args.unit.symbol()
    );
    println!("  header : {}", generated.header.display());
    println!("  source : {}", generated.source.display());

    Ok(())
}
