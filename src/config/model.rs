//! Config struct definition and default implementation.

use crate::diff::HunkClass;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".mutdiff.yaml";

/// Configuration for mutdiff reports.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Presentation
    // =========================================================================
    /// Whether reports use ANSI colors.
    pub color: bool,

    /// Maximum number of body lines printed per reported hunk.
    pub max_body_lines: usize,

    // =========================================================================
    // classify
    // =========================================================================
    /// Hunk classes printed by `classify` (others are counted but hidden).
    pub report_classes: Vec<HunkClass>,

    // =========================================================================
    // compare
    // =========================================================================
    /// Where `compare` writes its CSV of non-deterministic mutants.
    pub results_csv: String,

    /// Kill status meaning the mutant survived.
    pub live_status: String,

    /// Kill statuses meaning a test detected the mutant.
    pub failure_statuses: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            max_body_lines: 20,
            report_classes: vec![HunkClass::Other],
            results_csv: "results.csv".to_string(),
            live_status: "LIVE".to_string(),
            failure_statuses: vec!["EXC".to_string(), "FAIL".to_string()],
        }
    }
}
