use std::error::Error;
use std::io;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    filter::{self, FilterArgs},
    generate::{self, GenerateArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "siteswap", about = "Vanilla siteswap generator and filter", version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every siteswap for a ball count, height limit and period range.
    Generate(GenerateArgs),
    /// Echo the lines of a file whose siteswap has a property.
    Filter(FilterArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Filter(args) => filter::run(&args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
