//! Unified diff parsing and hunk classification.
//!
//! This module turns `git diff` output into per-file, per-hunk structures and
//! classifies each hunk by what it changes:
//! - `LineNumsOnly`: the only difference is a number (typically a line
//!   number embedded in a stack trace or test log)
//! - `FailingTestHeader`: the hunk drops a `## ... ##` failing-test banner
//! - `Other`: anything else, which is what a reviewer needs to look at
//!
//! Parsing is strict: anything outside the expected unified-diff shape is a
//! hard error carrying the offending line.

mod classify;
mod helpers;
mod model;
mod parser;


// Re-export public API
pub use classify::{HunkClass, classify_hunk};
pub use model::{FileDiff, FileStatus, Hunk};
pub use parser::parse_diff;
