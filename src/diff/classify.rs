//! Hunk classification.

use crate::error::{MutdiffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::helpers::{differing_middle, is_integer};
use super::model::Hunk;

/// What a hunk changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HunkClass {
    /// Paired lines differ only in a number.
    LineNumsOnly,
    /// The hunk removes a `## ... ##` failing-test banner.
    FailingTestHeader,
    /// Anything else.
    Other,
}

impl HunkClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            HunkClass::LineNumsOnly => "LINE_NUMS_ONLY",
            HunkClass::FailingTestHeader => "FAILING_TEST_HEADER",
            HunkClass::Other => "OTHER",
        }
    }
}

impl fmt::Display for HunkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single hunk.
///
/// With as many removed as added lines, only the first removed/added pair
/// decides: if the parts that differ are integers on both sides the hunk is
/// `LineNumsOnly`, otherwise `Other`. The remaining pairs are not inspected.
/// With unequal counts, a first removed line of the form `## ... ##` makes
/// the hunk a `FailingTestHeader`.
///
/// # Returns
///
/// * `Err(MutdiffError::UnrecognizedHunkLine)` - A body line with an unknown prefix
/// * `Err(MutdiffError::EmptyHunk)` - Nothing added or removed
pub fn classify_hunk(hunk: &Hunk) -> Result<HunkClass> {
    let mut removed: Vec<&str> = Vec::new();
    let mut added: Vec<&str> = Vec::new();

    for line in &hunk.body {
        if line.is_empty() || line.starts_with(' ') {
            continue;
        } else if let Some(content) = line.strip_prefix('-') {
            removed.push(content);
        } else if let Some(content) = line.strip_prefix('+') {
            added.push(content);
        } else {
            return Err(MutdiffError::UnrecognizedHunkLine {
                line: line.clone(),
            });
        }
    }

    if removed.is_empty() && added.is_empty() {
        return Err(MutdiffError::EmptyHunk {
            header: hunk.header.clone(),
        });
    }

    if removed.len() == added.len() {
        let (left, right) = (removed[0], added[0]);
        let (start, left_end, right_end) = differing_middle(left, right);
        if is_integer(&left[start..left_end]) && is_integer(&right[start..right_end]) {
            return Ok(HunkClass::LineNumsOnly);
        }
        return Ok(HunkClass::Other);
    }

    let banner = removed
        .first()
        .is_some_and(|first| first.starts_with("##") && first.trim().ends_with("##"));
    if banner {
        return Ok(HunkClass::FailingTestHeader);
    }

    Ok(HunkClass::Other)
}
