//! Parsed diff records.

use serde::Serialize;
use std::fmt;

/// How a file was changed, taken from the optional mode line after
/// `diff --git`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Plain content change (no mode line).
    #[default]
    Modified,
    /// `new file mode` was present.
    Added,
    /// `deleted file mode` was present.
    Deleted,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Modified => "modified",
            FileStatus::Added => "added",
            FileStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `@@ ... @@` block of a file diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// The range marker, up to and including the closing `@@`.
    pub header: String,
    /// Raw body lines with their ' ', '+' or '-' prefix. The first entry is
    /// whatever followed the closing `@@` on the header line (often empty).
    pub body: Vec<String>,
}

impl Hunk {
    /// The header line as it appeared in the input.
    pub fn header_line(&self) -> String {
        match self.body.first() {
            Some(rest) => format!("{}{}", self.header, rest),
            None => self.header.clone(),
        }
    }
}

/// All hunks for one `diff --git` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    /// Third token of the `diff --git` line (usually `a/<path>`).
    pub path_a: String,
    /// Fourth token of the `diff --git` line (usually `b/<path>`).
    pub path_b: String,
    pub status: FileStatus,
    /// Hunks in input order.
    pub hunks: Vec<Hunk>,
}
