//! Core types for stampnorm-core.
//!
//! This module defines the data structures shared by the parser, the
//! normalizer and the renderer: the parsed input [`Record`], its per-peer
//! [`Measurement`]s, and the derived [`Report`] of offsets.

/// A broadcast benchmark result as read from disk.
///
/// Built once by [`Record::parse`] from the trimmed lines of
/// the input file. The first line is the label, the second the `Before`
/// sample, the last the `After` sample, and everything in between is a peer
/// measurement in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First line of the file, echoed verbatim (after trimming).
    pub label: String,
    /// Timestamp taken by the root just before the broadcast.
    pub before: i64,
    /// Per-peer timestamps, in file order. The position is the peer index.
    pub mids: Vec<Measurement>,
    /// Timestamp taken by the root once every peer has reported.
    pub after: i64,
    /// 1-based line number of the `After` sample.
    pub after_line: usize,
}

impl Record {
    /// Number of peer measurements between `Before` and `After`.
    pub fn peer_count(&self) -> usize {
        self.mids.len()
    }
}

/// One peer timestamp from a line strictly between `Before` and `After`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Tag text before the colon. Read but never validated.
    pub tag: String,
    pub value: i64,
    /// 1-based line number in the input file.
    pub line: usize,
}

/// Offsets of every sample in a [`Record`] relative to its `Before` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub label: String,
    /// `before - before`; always zero.
    pub begin: i64,
    /// `mid - before` for each peer, in file order.
    pub mids: Vec<i64>,
    /// `after - before`.
    pub end: i64,
}
