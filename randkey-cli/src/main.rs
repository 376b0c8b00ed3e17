use clap::Parser;
use randkey::{
    cli::Args,
    error::Result,
    keygen::{self, KEY_LENGTH},
    output,
};
use std::{io, process};
use tracing::{Level, debug, error};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    init_logging(args.verbose, args.quiet)?;

    debug!("generating {KEY_LENGTH}-character key");
    let key = keygen::generate(KEY_LENGTH);

    // stdout carries the key and nothing else; diagnostics go to stderr.
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_key(&mut handle, &key)
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(verbose)
                .with_writer(io::stderr),
        )
        .init();
    Ok(())
}
