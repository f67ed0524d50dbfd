//! Normalizer: converts a [`Record`] into a [`Report`] of offsets from the
//! `Before` sample.

use crate::error::NormalizeError;
use crate::types::{Record, Report};

/// Subtract `record.before` from every sample.
///
/// Arithmetic is exact. A difference that does not fit in an `i64` is
/// reported as [`NormalizeError::Overflow`] against the offending line.
pub fn normalize(record: &Record) -> Result<Report, NormalizeError> {
    let offset = |value: i64, line: usize| {
        value
            .checked_sub(record.before)
            .ok_or(NormalizeError::Overflow { line })
    };

    let mids = record
        .mids
        .iter()
        .map(|m| offset(m.value, m.line))
        .collect::<Result<Vec<_>, _>>()?;
    let end = offset(record.after, record.after_line)?;

    Ok(Report {
        label: record.label.clone(),
        begin: 0,
        mids,
        end,
    })
}
