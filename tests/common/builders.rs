//! Test builders — ergonomic constructors for result files on disk.
//!
//! These builders are designed for readability in tests, not for production
//! use. They panic on I/O failure rather than returning `Result`.

use std::io::Write;
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// ResultFileBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for broadcast result files.
///
/// # Example
///
/// ```rust
/// let file = ResultFileBuilder::new("run2")
///     .before(1000)
///     .peer("peer0", 1005)
///     .after(1020)
///     .write();
/// ```
pub struct ResultFileBuilder {
    label: String,
    before: String,
    peers: Vec<String>,
    after: String,
}

impl ResultFileBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            before: "Before: 0".to_string(),
            peers: Vec::new(),
            after: "After: 0".to_string(),
        }
    }

    pub fn before(mut self, value: i64) -> Self {
        self.before = format!("Before: {value}");
        self
    }

    pub fn after(mut self, value: i64) -> Self {
        self.after = format!("After: {value}");
        self
    }

    pub fn peer(mut self, tag: &str, value: i64) -> Self {
        self.peers.push(format!("{tag}: {value}"));
        self
    }

    pub fn text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.label, self.before);
        for peer in &self.peers {
            out.push_str(peer);
            out.push('\n');
        }
        out.push_str(&self.after);
        out.push('\n');
        out
    }

    pub fn write(&self) -> NamedTempFile {
        write_input(&self.text())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Write `text` to a fresh temporary file.
pub fn write_input(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp input");
    file.write_all(text.as_bytes()).expect("write temp input");
    file.flush().expect("flush temp input");
    file
}

/// Build the text of a result file from a before value, peer values, and an
/// after value, tagging peers `remote <i>`.
pub fn result_text(label: &str, before: i64, peers: &[i64], after: i64) -> String {
    peers
        .iter()
        .enumerate()
        .fold(
            ResultFileBuilder::new(label).before(before).after(after),
            |b, (i, &value)| b.peer(&format!("remote {i}"), value),
        )
        .text()
}
