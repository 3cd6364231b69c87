//! Resistor bridge solver
//!
//! Prints the fixed resistor giving the widest output swing for a divider
//! whose lower leg is an NTC thermistor. Run with `--help` for the schematic.

use anyhow::Result;
use nanotherm_tools::bridge::{self, BridgeArgs};

fn main() -> Result<()> {
    let args: BridgeArgs = nanotherm_tools::parse_args();
    nanotherm_tools::init_logging(args.verbose);

    let report = bridge::run(&args)?;
    for line in report.lines() {
        println!("{}", line);
    }

    Ok(())
}
