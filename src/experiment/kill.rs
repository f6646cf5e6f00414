//! Mutant kill status across repeated runs.

use crate::error::{MutdiffError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-run kill results file.
pub const KILL_FILE: &str = "kill.csv";

/// Kill status of every mutant in every run.
#[derive(Debug, Clone)]
pub struct KillMatrix {
    pub dirs: Vec<PathBuf>,
    /// One entry per mutant row, holding that row's status in each run.
    pub rows: Vec<Vec<String>>,
}

/// A mutant whose status differs between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillRow {
    /// 1-based row number in kill.csv.
    pub mutant: usize,
    pub statuses: Vec<String>,
    /// One run reports the mutant live while another reports it killed by
    /// a failing test.
    pub live_and_failure: bool,
}

/// Outcome of comparing runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillSummary {
    /// Number of mutants compared.
    pub total: usize,
    /// Mutants whose status differs between runs, in row order.
    pub rows: Vec<KillRow>,
    /// 1-based run indices that reported live on a live-and-failure row.
    pub live_runs: BTreeSet<usize>,
}

impl KillSummary {
    pub fn nondeterministic(&self) -> usize {
        self.rows.len()
    }

    pub fn live_and_failure(&self) -> usize {
        self.rows.iter().filter(|r| r.live_and_failure).count()
    }

    /// Write the non-deterministic mutants as CSV:
    /// `mut-id, <one column per run>, warn`.
    pub fn write_csv<W: Write>(&self, out: W, dirs: &[PathBuf]) -> Result<()> {
        let csv_err = |e: csv::Error| MutdiffError::UserError(format!("failed to write CSV: {}", e));
        let mut wtr = csv::WriterBuilder::new().from_writer(out);

        let mut header = vec!["mut-id".to_string()];
        header.extend(dirs.iter().map(|d| d.display().to_string()));
        header.push("warn".to_string());
        wtr.write_record(&header).map_err(csv_err)?;

        for row in &self.rows {
            let mut record = vec![row.mutant.to_string()];
            record.extend(row.statuses.iter().cloned());
            record.push(if row.live_and_failure { "1" } else { "0" }.to_string());
            wtr.write_record(&record).map_err(csv_err)?;
        }

        wtr.flush()
            .map_err(|e| MutdiffError::UserError(format!("failed to write CSV: {}", e)))?;
        Ok(())
    }

    /// Write the CSV to a file path.
    pub fn write_csv_file(&self, path: &Path, dirs: &[PathBuf]) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| {
            MutdiffError::UserError(format!("failed to create '{}': {}", path.display(), e))
        })?;
        self.write_csv(file, dirs)
    }
}

impl KillMatrix {
    /// Read `kill.csv` from every run directory and line the rows up.
    ///
    /// The status is the second column. Runs with different mutant counts
    /// are compared up to the shortest one.
    pub fn load(dirs: &[PathBuf]) -> Result<Self> {
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(dirs.len());
        for dir in dirs {
            columns.push(read_statuses(&dir.join(KILL_FILE))?);
        }

        let len = columns.iter().map(Vec::len).min().unwrap_or(0);
        if columns.iter().any(|c| c.len() != len) {
            info!(rows = len, "runs have different mutant counts, comparing common rows");
        }

        let rows = (0..len)
            .map(|i| columns.iter().map(|c| c[i].clone()).collect())
            .collect();

        Ok(Self {
            dirs: dirs.to_vec(),
            rows,
        })
    }

    /// Find mutants with inconsistent status.
    ///
    /// `live` is the status of a surviving mutant; `failures` are statuses
    /// meaning a test detected it.
    pub fn analyze(&self, live: &str, failures: &[String]) -> KillSummary {
        let mut rows = Vec::new();
        let mut live_runs = BTreeSet::new();

        for (i, statuses) in self.rows.iter().enumerate() {
            let distinct: BTreeSet<&String> = statuses.iter().collect();
            if distinct.len() <= 1 {
                continue;
            }

            let has_live = statuses.iter().any(|s| s == live);
            let has_failure = statuses.iter().any(|s| failures.contains(s));
            let live_and_failure = has_live && has_failure;
            if live_and_failure {
                for (run, status) in statuses.iter().enumerate() {
                    if status == live {
                        live_runs.insert(run + 1);
                    }
                }
            }

            rows.push(KillRow {
                mutant: i + 1,
                statuses: statuses.clone(),
                live_and_failure,
            });
        }

        debug!(total = self.rows.len(), flagged = rows.len(), "kill comparison done");
        KillSummary {
            total: self.rows.len(),
            rows,
            live_runs,
        }
    }
}

fn read_statuses(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| MutdiffError::ResultsError(format!("{}: {}", path.display(), e)))?;

    let mut statuses = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| MutdiffError::ResultsError(format!("{}: {}", path.display(), e)))?;
        let status = record.get(1).ok_or_else(|| {
            MutdiffError::ResultsError(format!(
                "{} line {}: missing status column",
                path.display(),
                record.position().map(|p| p.line()).unwrap_or_default()
            ))
        })?;
        statuses.push(status.to_string());
    }

    Ok(statuses)
}
