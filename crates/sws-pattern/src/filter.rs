use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sws_core::errors::{ErrorInfo, SwsError};
use sws_core::notation;
use tracing::{debug, info};

use crate::classify::Classifier;
use crate::siteswap::Siteswap;

/// Line counts gathered while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Lines read from the input.
    pub read: usize,
    /// Lines echoed to the output.
    pub matched: usize,
    /// Lines that were not valid siteswap notation.
    pub malformed: usize,
}

/// Echoes every line of `reader` whose siteswap satisfies `classifier`.
///
/// Lines are written verbatim, not in canonical form. Lines that fail to
/// decode are skipped and only counted.
pub fn filter_lines<R: BufRead, W: Write>(
    classifier: Classifier,
    reader: R,
    mut writer: W,
) -> Result<FilterSummary, SwsError> {
    let mut summary = FilterSummary::default();
    for bytes in reader.split(b'\n') {
        let mut bytes = bytes.map_err(|err| SwsError::io("read-input", err))?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        summary.read += 1;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                debug!(error = %err, "skipping line that is not utf-8");
                summary.malformed += 1;
                continue;
            }
        };
        let siteswap = match notation::decode(&line) {
            Ok(throws) => Siteswap::new(throws),
            Err(err) => {
                debug!(line = %line, error = %err, "skipping malformed line");
                summary.malformed += 1;
                continue;
            }
        };
        if classifier.matches(&siteswap) {
            writeln!(writer, "{line}").map_err(|err| SwsError::io("write-output", err))?;
            summary.matched += 1;
        }
    }
    writer
        .flush()
        .map_err(|err| SwsError::io("write-output", err))?;
    info!(
        classifier = %classifier,
        read = summary.read,
        matched = summary.matched,
        malformed = summary.malformed,
        "filter finished"
    );
    Ok(summary)
}

/// Opens `path` and runs [`filter_lines`] over it.
pub fn filter_file<W: Write>(
    classifier: Classifier,
    path: &Path,
    writer: W,
) -> Result<FilterSummary, SwsError> {
    let file = File::open(path).map_err(|err| {
        SwsError::Io(
            ErrorInfo::new("read-input", format!("could not open file: {err}"))
                .with_context("path", path.display().to_string()),
        )
    })?;
    filter_lines(classifier, BufReader::new(file), writer)
}
