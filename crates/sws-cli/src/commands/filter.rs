use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Args;
use sws_pattern::{filter_file, Classifier};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Property to keep: i1, i2, nikolaj or reverse.
    pub classifier: Classifier,
    /// File with one siteswap per line.
    pub file: PathBuf,
}

pub fn run(args: &FilterArgs) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    filter_file(args.classifier, &args.file, stdout.lock())?;
    Ok(())
}
