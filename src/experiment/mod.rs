//! Experiment result analysis.
//!
//! Two kinds of run output are understood:
//! - an experiment root with `started.csv` and `status.csv`, one row per
//!   trial, used to measure how consistently trials of a version end
//!   (see [`entropy`])
//! - a run directory with `kill.csv`, one row per mutant, used to line up
//!   kill status across repeated runs
//!
//! All files are plain CSV with a header row.

mod entropy;
mod kill;
mod trials;


// Re-export public API
pub use entropy::{ResultCode, entropy};
pub use kill::{KILL_FILE, KillMatrix, KillRow, KillSummary};
pub use trials::{Comparison, Experiment, Trial, VersionStats};
