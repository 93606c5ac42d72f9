//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// decint, an arbitrary-precision decimal integer calculator.
///
/// Reads one operation per line: `<type> <op> <a> [b]` where type is
/// `U` or `S`, op is one of add, sub, mul, div, mod, cmp, to_str,
/// to_u64, to_s64, to_double, and the operands are base-10 literals
/// (`S` accepts a leading `-`). Answers `OK <result>` or
/// `EXC <message>` per line.
#[derive(Parser, Debug)]
#[command(name = "decint", version, about)]
pub struct AppConfig {
    /// Read protocol lines from a file instead of stdin.
    #[arg(short, long, env = "DECINT_INPUT")]
    pub input: Option<PathBuf>,

    /// Verbose tracing output on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
