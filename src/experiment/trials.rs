//! Repeated-trial experiment results.

use crate::error::{MutdiffError, Result};
use csv::StringRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::entropy::{ResultCode, entropy};

const STARTED_FILE: &str = "started.csv";
const STATUS_FILE: &str = "status.csv";

/// One trial of one project version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trial {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Process return value from status.csv.
    pub return_value: Option<i32>,
    pub code: ResultCode,
}

impl Trial {
    fn started() -> Self {
        Self {
            start: None,
            end: None,
            return_value: None,
            code: ResultCode::NoResult,
        }
    }

    /// Short human label: SUCCESS, TIMEOUT, ER(<code>) or NO RESULT.
    pub fn label(&self) -> String {
        match (self.code, self.return_value) {
            (ResultCode::Success, _) => "SUCCESS".to_string(),
            (ResultCode::Timeout, _) => "TIMEOUT".to_string(),
            (ResultCode::Error, Some(value)) => format!("ER({:^3})", value),
            _ => "NO RESULT".to_string(),
        }
    }
}

/// trial id -> trial
pub type Trials = BTreeMap<String, Trial>;
/// version id -> trials
pub type Versions = BTreeMap<String, Trials>;

/// All trials recorded under one experiment root, keyed by project id,
/// version id and trial id.
#[derive(Debug, Clone)]
pub struct Experiment {
    pub root: PathBuf,
    pub data: BTreeMap<String, Versions>,
}

/// Per-version statistics across two experiments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionStats {
    pub pid: String,
    pub vid: String,
    pub codes_a: Vec<ResultCode>,
    pub codes_b: Vec<ResultCode>,
    pub entropy_a: f64,
    pub entropy_b: f64,
    pub entropy_all: f64,
}

/// One line of a two-experiment comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// A project or version present in only one experiment.
    Missing {
        pid: String,
        vid: Option<String>,
        root: PathBuf,
    },
    Version(VersionStats),
}

impl Experiment {
    /// Load `started.csv` and `status.csv` from an experiment root.
    ///
    /// Every started trial begins as `NoResult`; status rows fill in the
    /// timing and return value.
    ///
    /// # Returns
    ///
    /// * `Err(MutdiffError::ResultsError)` - Missing file, wrong field count,
    ///   non-integer return value, or a status row for a trial never started
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let mut data: BTreeMap<String, Versions> = BTreeMap::new();

        for (row, record) in read_rows(&root.join(STARTED_FILE), 3)? {
            data.entry(record[0].to_string())
                .or_default()
                .entry(record[1].to_string())
                .or_default()
                .entry(record[2].to_string())
                .or_insert_with(Trial::started);
            debug!(row, "started trial");
        }

        let status_path = root.join(STATUS_FILE);
        for (row, record) in read_rows(&status_path, 6)? {
            let value: i32 = record[5].parse().map_err(|_| {
                MutdiffError::ResultsError(format!(
                    "{} line {}: return value '{}' is not an integer",
                    status_path.display(),
                    row,
                    &record[5]
                ))
            })?;

            let trial = data
                .get_mut(&record[0])
                .and_then(|versions| versions.get_mut(&record[1]))
                .and_then(|trials| trials.get_mut(&record[2]))
                .ok_or_else(|| {
                    MutdiffError::ResultsError(format!(
                        "{} line {}: trial {}-{} ({}) was never started",
                        status_path.display(),
                        row,
                        &record[0],
                        &record[1],
                        &record[2]
                    ))
                })?;

            trial.start = Some(record[3].to_string());
            trial.end = Some(record[4].to_string());
            trial.return_value = Some(value);
            trial.code = ResultCode::from_return_value(value);
        }

        Ok(Self { root, data })
    }

    /// Result codes of every trial of one version, in trial order.
    pub fn codes(&self, pid: &str, vid: &str) -> Vec<ResultCode> {
        self.data
            .get(pid)
            .and_then(|versions| versions.get(vid))
            .map(|trials| trials.values().map(|t| t.code).collect())
            .unwrap_or_default()
    }

    /// Compare two experiments project by project and version by version.
    ///
    /// Projects and versions are taken from the union of both experiments,
    /// in sorted order; anything present on only one side is reported as
    /// missing from the other.
    pub fn compare(&self, other: &Experiment) -> Vec<Comparison> {
        let mut out = Vec::new();
        let pids: BTreeSet<&String> = self.data.keys().chain(other.data.keys()).collect();

        for pid in pids {
            let (Some(versions_a), Some(versions_b)) = (self.data.get(pid), other.data.get(pid))
            else {
                let root = if self.data.contains_key(pid) {
                    &other.root
                } else {
                    &self.root
                };
                warn!(pid = %pid, root = %root.display(), "project missing from experiment");
                out.push(Comparison::Missing {
                    pid: pid.clone(),
                    vid: None,
                    root: root.clone(),
                });
                continue;
            };

            let vids: BTreeSet<&String> = versions_a.keys().chain(versions_b.keys()).collect();
            for vid in vids {
                if !versions_a.contains_key(vid) || !versions_b.contains_key(vid) {
                    let root = if versions_a.contains_key(vid) {
                        &other.root
                    } else {
                        &self.root
                    };
                    out.push(Comparison::Missing {
                        pid: pid.clone(),
                        vid: Some(vid.clone()),
                        root: root.clone(),
                    });
                    continue;
                }

                let codes_a = self.codes(pid, vid);
                let codes_b = other.codes(pid, vid);
                let all: Vec<ResultCode> = codes_a.iter().chain(&codes_b).copied().collect();
                out.push(Comparison::Version(VersionStats {
                    pid: pid.clone(),
                    vid: vid.clone(),
                    entropy_a: entropy(&codes_a),
                    entropy_b: entropy(&codes_b),
                    entropy_all: entropy(&all),
                    codes_a,
                    codes_b,
                }));
            }
        }

        out
    }
}

/// Read the data rows of a headed CSV file, requiring `fields` columns each.
///
/// Yields `(line number, record)` pairs.
fn read_rows(path: &Path, fields: usize) -> Result<Vec<(u64, StringRecord)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| MutdiffError::ResultsError(format!("{}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| MutdiffError::ResultsError(format!("{}: {}", path.display(), e)))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() != fields {
            return Err(MutdiffError::ResultsError(format!(
                "{} line {}: expected {} fields, found {}",
                path.display(),
                line,
                fields,
                record.len()
            )));
        }
        rows.push((line, record));
    }

    Ok(rows)
}
