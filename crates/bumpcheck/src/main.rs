use std::io::IsTerminal;

use anstream::println;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use tracing_subscriber::EnvFilter;

pub mod commands;

use commands::compare::{CompareArgs, compare, literal};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(flatten)]
    compare: CompareArgs,
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbose);

    let newer = compare(&cli.compare)?;
    println!("{}", literal(newer));

    Ok(())
}
