//! Parser: turns the text of a broadcast result file into a [`Record`].
//!
//! The file is read whole and closed before parsing starts. Lines are trimmed,
//! then scanned once left to right: label, `Before`, peers, `After`.

use crate::config::Tags;
use crate::error::{FormatError, NormalizeError};
use crate::types::{Measurement, Record};
use std::path::Path;

/// Read `path` and return its lines with surrounding whitespace stripped.
///
/// A trailing newline does not produce an extra empty line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, NormalizeError> {
    let text = std::fs::read_to_string(path).map_err(|source| NormalizeError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&text))
}

/// Split text on `\n` / `\r\n` and trim each line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Split a `<tag>: <value>` line on its single colon.
///
/// `line` is the 1-based line number used in diagnostics. Neither half is
/// trimmed here; tags are compared exactly and values are trimmed by
/// [`parse_value`].
pub fn split_tagged(text: &str, line: usize) -> Result<(&str, &str), FormatError> {
    match text.split_once(':') {
        Some((tag, value)) if !value.contains(':') => Ok((tag, value)),
        _ => Err(FormatError::MissingSeparator {
            line,
            text: text.to_string(),
        }),
    }
}

/// Parse a value segment as a signed 64-bit integer after trimming.
pub fn parse_value(text: &str, line: usize) -> Result<i64, NormalizeError> {
    let value = text.trim();
    value.parse::<i64>().map_err(|source| NormalizeError::Parse {
        line,
        value: value.to_string(),
        source,
    })
}

/// Parse a sentinel line whose tag must match `expected` exactly.
fn parse_sentinel(text: &str, line: usize, expected: &str) -> Result<i64, NormalizeError> {
    let (tag, value) = split_tagged(text, line)?;
    if tag != expected {
        return Err(FormatError::UnexpectedTag {
            line,
            expected: expected.to_string(),
            found: tag.to_string(),
        }
        .into());
    }
    parse_value(value, line)
}

impl Record {
    /// Parse already-trimmed lines into a record.
    ///
    /// Fails with [`FormatError`] on a short file, a missing colon or a wrong
    /// sentinel tag, and with [`NormalizeError::Parse`] on a non-integer value.
    /// Peer tags are kept but never checked.
    pub fn parse(lines: &[String], tags: &Tags) -> Result<Record, NormalizeError> {
        let [label, before, mids @ .., after] = lines else {
            return Err(FormatError::TooShort { lines: lines.len() }.into());
        };

        let before = parse_sentinel(before, 2, &tags.before)?;

        let mids = mids
            .iter()
            .enumerate()
            .map(|(i, text)| -> Result<Measurement, NormalizeError> {
                // Peers start on line 3.
                let line = i + 3;
                let (tag, value) = split_tagged(text, line)?;
                Ok(Measurement {
                    tag: tag.to_string(),
                    value: parse_value(value, line)?,
                    line,
                })
            })
            .collect::<Result<Vec<_>, NormalizeError>>()?;

        let after_line = lines.len();
        let after = parse_sentinel(after, after_line, &tags.after)?;

        Ok(Record {
            label: label.clone(),
            before,
            mids,
            after,
            after_line,
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_path(path: &Path, tags: &Tags) -> Result<Record, NormalizeError> {
        let lines = read_lines(path)?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "read input");

        let record = Record::parse(&lines, tags)?;
        tracing::debug!(
            label = %record.label,
            peers = record.peer_count(),
            before = record.before,
            after = record.after,
            "parsed record"
        );
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
