//! Command-line argument definitions using clap

use clap::Parser;

/// Sumadora: a keypad-driven desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "sumadora")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Maximum number of entries kept on the session tape
    #[arg(long, default_value = "100")]
    pub tape_limit: usize,

    /// Start with the tape panel hidden
    #[arg(long)]
    pub no_tape: bool,

    /// Start with the help sidebar hidden
    #[arg(long)]
    pub no_help: bool,
}

impl Cli {
    /// The tracing filter directive implied by the verbosity flags.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }
}
