use clap::Parser;

/// Command-line arguments for the `randkey` binary.
///
/// The key length, character set, and output destination are fixed; the only
/// recognized flags steer log verbosity.
#[derive(Debug, Parser)]
#[command(
    name = "randkey",
    version,
    about = "Generates a random 256-character key and prints it to standard output"
)]
pub struct Args {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}
