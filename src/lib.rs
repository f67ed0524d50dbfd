//! stampnorm — broadcast benchmark timestamp normaliser.
//!
//! Reads a result file produced by the broadcast microbenchmark and prints
//! every timestamp as an offset from the `Before` sample. The binary is a thin
//! wrapper around [`run`]; integration tests drive it directly with an
//! in-memory writer.
//!
//! # Architecture
//!
//! ```text
//! file ──► Record ──► Report ──► stdout
//! ```
//!
//! Parsing and normalisation live in `stampnorm-core`. Nothing is written
//! until the whole file has been parsed and normalised, so a failing run
//! produces no partial output.

use anyhow::Context;
use stampnorm_core::config::Config;
use stampnorm_core::{normalize, Record};
use std::io::Write;
use std::path::Path;

/// Normalise `input` and write the report to `out`.
///
/// The input path is the only thing a caller controls: tags and labels come
/// from the built-in [`Config::defaults`].
pub fn run(input: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::defaults();
    let record = Record::from_path(input, &config.tags)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let report = normalize(&record)
        .with_context(|| format!("failed to normalise {}", input.display()))?;

    out.write_all(report.render(&config.labels).as_bytes())
        .context("failed to write report")?;
    out.flush().context("failed to write report")
}
