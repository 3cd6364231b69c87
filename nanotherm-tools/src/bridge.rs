//! Resistor bridge solver
//!
//! ```bash
//! resistor-bridge 119 1353 --vcc 5
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use nanotherm_core::BridgeSolution;

const SCHEMATIC: &str = "\
Schematic:

  Vcc
    ┃
   ┏┻┓
   ┃ ┃ R
   ┗┳┛
    ┣━━━━━ Vout
   ┏┻┓
   ┃/┃ NTC
   ┗┳┛
    ┃
   ━┻━ GND

Pick rmin and rmax at the ends of the temperature range the NTC will see.
The wider the range, the wider the output voltage swing.";

/// Computes the value of R (upper resistor) giving the maximum output
/// voltage swing of the bridge while the NTC moves between two values.
#[derive(Debug, Parser)]
#[command(
    name = "resistor-bridge",
    version = nanotherm_core::VERSION,
    after_help = SCHEMATIC,
    allow_negative_numbers = true
)]
pub struct BridgeArgs {
    /// Minimum NTC resistance (high temperature)
    pub rmin: f64,

    /// Maximum NTC resistance (low temperature)
    pub rmax: f64,

    /// Supply voltage; also prints the bridge output range
    #[arg(long)]
    pub vcc: Option<f64>,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output voltages of the solved bridge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeVoltages {
    /// Supply voltage
    pub vcc: f64,
    /// Vout with the NTC at rmin
    pub at_rmin: f64,
    /// Vout with the NTC at rmax
    pub at_rmax: f64,
}

impl BridgeVoltages {
    /// Output span
    pub fn swing(&self) -> f64 {
        (self.at_rmax - self.at_rmin).abs()
    }
}

/// Solved bridge plus optional voltages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeReport {
    /// Ideal resistor and the inputs it was solved from
    pub solution: BridgeSolution,
    /// Present when `--vcc` was given
    pub voltages: Option<BridgeVoltages>,
}

impl BridgeReport {
    /// Lines printed to stdout
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Ideal resistance value for R should be : {}",
                crate::highlight(&self.solution.ideal.to_string())
            ),
            "The unit (Ohms, KOhms, MOhms) is the same as input data".to_string(),
        ];

        if let Some(v) = self.voltages {
            lines.push(format!(
                "With Vcc = {} : Vout = {:.3} at rmin, {:.3} at rmax, swing {:.3}",
                v.vcc,
                v.at_rmin,
                v.at_rmax,
                v.swing()
            ));
        }

        lines
    }
}

/// Solve the bridge described by `args`
pub fn run(args: &BridgeArgs) -> Result<BridgeReport> {
    tracing::debug!(rmin = args.rmin, rmax = args.rmax, "Solving bridge");
    let solution = BridgeSolution::solve(args.rmin, args.rmax)
        .context("rmin and rmax must be distinct positive values")?;

    let voltages = args.vcc.map(|vcc| {
        let divider = solution.divider(vcc);
        BridgeVoltages {
            vcc,
            at_rmin: divider.output_voltage(solution.rmin),
            at_rmax: divider.output_voltage(solution.rmax),
        }
    });

    Ok(BridgeReport { solution, voltages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BridgeArgs {
        let argv = std::iter::once("resistor-bridge").chain(args.iter().copied());
        BridgeArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn solves_one_k_to_ten_k() {
        let report = run(&parse(&["1000", "10000"])).unwrap();
        assert!((report.solution.ideal - 3162.277_660_168_379_5).abs() < 1e-9);
        assert!(report.voltages.is_none());
        assert_eq!(report.lines().len(), 2);
    }

    #[test]
    fn accepts_fractional_input() {
        let args = parse(&["1.5", "13.53"]);
        assert_eq!(args.rmin, 1.5);
        assert_eq!(args.rmax, 13.53);
    }

    #[test]
    fn equal_bounds_fail() {
        assert!(run(&parse(&["4700", "4700"])).is_err());
    }

    #[test]
    fn reports_voltages() {
        let report = run(&parse(&["119", "1353", "--vcc", "5"])).unwrap();
        let v = report.voltages.unwrap();

        assert!(v.at_rmax > v.at_rmin);
        assert!(v.swing() > 0.0 && v.swing() < 5.0);
        assert_eq!(report.lines().len(), 3);
    }
}
