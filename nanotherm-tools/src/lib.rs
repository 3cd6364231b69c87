//! Command line front-ends for `nanotherm-core`
//!
//! Two binaries share the glue in this crate:
//!
//! - `thermistor-generator`: writes a C header/source pair tabulating an
//!   NTC thermistor curve (see [`generator`])
//! - `resistor-bridge`: prints the fixed resistor giving the widest output
//!   swing for an NTC divider (see [`bridge`])
//!
//! Both exit with 0 on success or `--help`, and 1 on any usage error.

#![forbid(unsafe_code)]

use std::io::IsTerminal;

use clap::{error::ErrorKind, Parser};
use tracing::Level;

pub mod bridge;
pub mod generator;

/// Parse the process arguments, exiting on usage errors
///
/// Unlike [`Parser::parse`], invalid invocations exit with 1 rather than
/// clap's default of 2.
pub fn parse_args<P: Parser>() -> P {
    P::try_parse().unwrap_or_else(|err| {
        let code = exit_code(&err);
        let _ = err.print();
        std::process::exit(code);
    })
}

/// Exit code for a failed argument parse
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Install the stderr log subscriber
///
/// Also picks up `log` records emitted by `nanotherm-core`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_max_level(level)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Bold blue when stdout is a terminal, plain otherwise
pub fn highlight(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        format!("\x1b[34;1m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}
