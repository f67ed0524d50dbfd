//! Rendering of a [`Report`] in the plain-text broadcast format.

use crate::config::Labels;
use crate::types::Report;
use std::fmt;

impl Report {
    /// Render with the given labels.
    ///
    /// ```text
    /// <label>
    /// master_begin: 0
    /// mid_0: <offset>
    /// master_end: <offset>
    /// <blank line>
    /// ```
    pub fn render(&self, labels: &Labels) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_into(&mut out, labels);
        out
    }

    fn write_into(&self, out: &mut impl fmt::Write, labels: &Labels) -> fmt::Result {
        writeln!(out, "{}", self.label)?;
        writeln!(out, "{}: {}", labels.begin, self.begin)?;
        for (i, offset) in self.mids.iter().enumerate() {
            writeln!(out, "{}_{}: {}", labels.mid_prefix, i, offset)?;
        }
        writeln!(out, "{}: {}", labels.end, self.end)?;
        writeln!(out)
    }
}

/// Renders with the default labels.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_into(f, &Labels::default())
    }
}
