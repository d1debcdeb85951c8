use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::Throw;
use sws_search::{load_config, GenerateConfig, GenerationReport, Generator, PeriodRange};
use tracing::info;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of balls.
    #[arg(required_unless_present = "config")]
    pub balls: Option<Throw>,
    /// Largest throw height (at most 35).
    #[arg(required_unless_present = "config")]
    pub max_height: Option<Throw>,
    /// Shortest period.
    #[arg(required_unless_present = "config")]
    pub from: Option<usize>,
    /// Longest period.
    #[arg(required_unless_present = "config")]
    pub to: Option<usize>,
    /// YAML file holding the run parameters instead of positionals.
    #[arg(long, conflicts_with_all = ["balls", "max_height", "from", "to"])]
    pub config: Option<PathBuf>,
    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl GenerateArgs {
    fn resolve(&self) -> Result<GenerateConfig, SwsError> {
        let mut config = match (&self.config, self.balls, self.max_height, self.from, self.to) {
            (Some(path), ..) => load_config(path)?,
            (None, Some(balls), Some(max_height), Some(from), Some(to)) => {
                let config = GenerateConfig::new(balls, max_height, PeriodRange::new(from, to));
                config.validate()?;
                config
            }
            _ => {
                return Err(SwsError::Config(
                    ErrorInfo::new("missing-arguments", "generation parameters are incomplete")
                        .with_hint("pass <balls> <max-height> <from> <to> or --config <yaml>"),
                ))
            }
        };
        if self.report.is_some() {
            config.report = self.report.clone();
        }
        Ok(config)
    }
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = args.resolve()?;
    let stdout = io::stdout();
    execute(&config, stdout.lock())
}

/// Runs the whole period range, then prints the patterns one per line.
fn execute<W: Write>(config: &GenerateConfig, mut out: W) -> Result<(), Box<dyn Error>> {
    let generator = Generator::new(config.graph_config())?;
    info!(
        balls = config.balls,
        max_height = config.max_height,
        states = generator.graph().len(),
        "built state graph"
    );
    let generation = generator.generate(config.periods)?;

    for siteswap in &generation.patterns {
        writeln!(out, "{siteswap}")?;
    }
    out.flush()?;

    if let Some(path) = &config.report {
        GenerationReport::build(&generator, config.periods, &generation).write(path)?;
        info!(path = %path.display(), "wrote report");
    }
    Ok(())
}
