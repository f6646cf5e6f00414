//! Human-readable reports.
//!
//! Commands hand parsed data to a [`Reporter`], which owns the layout and
//! the color palette. Nothing here parses or classifies.

mod style;

pub use style::Palette;

use crate::diff::{FileDiff, Hunk};
use crate::error::{MutdiffError, Result};
use crate::experiment::{Comparison, KillSummary, ResultCode, Trial, VersionStats};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes reports to any output sink.
pub struct Reporter<W: Write> {
    out: W,
    palette: Palette,
}

fn write_err(e: std::io::Error) -> MutdiffError {
    MutdiffError::UserError(format!("failed to write report: {}", e))
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).map_err(write_err)
    }

    // =========================================================================
    // classify
    // =========================================================================

    /// Summary block opening every reported file.
    pub fn file_summary(&mut self, file: &FileDiff) -> Result<()> {
        self.line(&"-".repeat(80))?;
        self.line(&format!("Diff from files: {} {}", file.path_a, file.path_b))?;
        self.line(&format!("    Status {}", file.status))?;
        self.line(&format!("    Num Hunks: {}", file.hunks.len()))
    }

    /// One reported hunk, its body cut to `max_lines` lines.
    pub fn hunk(&mut self, index: usize, hunk: &Hunk, max_lines: usize) -> Result<()> {
        self.line(&"+-".repeat(40))?;
        self.line("")?;
        self.line(&format!(
            "{} {}",
            self.palette.bold(&format!(">>> Hunk {}:", index)),
            hunk.header
        ))?;
        for body_line in hunk.body.iter().take(max_lines) {
            self.line(body_line)?;
        }
        self.line("")
    }

    /// JSON rendering of parsed files with per-hunk classes.
    pub fn json<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| MutdiffError::UserError(format!("failed to encode JSON: {}", e)))?;
        self.line(&text)
    }

    // =========================================================================
    // entropy
    // =========================================================================

    pub fn trial(&mut self, pid: &str, vid: &str, tid: &str, trial: &Trial) -> Result<()> {
        self.line(&format!(
            "{}-{:<3} ({}) {}-{}: {}",
            pid,
            vid,
            tid,
            trial.start.as_deref().unwrap_or("?"),
            trial.end.as_deref().unwrap_or("?"),
            self.palette.trial(&trial.label())
        ))
    }

    pub fn entropy(&mut self, value: f64) -> Result<()> {
        self.line(&format!("H={}", value))
    }

    pub fn comparison_header(&mut self, root_a: &Path, root_b: &Path) -> Result<()> {
        self.line(&self.palette.bold("Experiments"))?;
        self.line(&format!("  A: {}", root_a.display()))?;
        self.line(&format!("  B: {}", root_b.display()))?;
        self.line(&format!(
            "{:<10} {:<6} {:<24} {:<24} {:>6} {:>6} {:>6}",
            "pid", "vid", "codes A", "codes B", "H(A)", "H(B)", "H"
        ))
    }

    pub fn comparison(&mut self, row: &Comparison) -> Result<()> {
        match row {
            Comparison::Missing { pid, vid, root } => {
                let subject = match vid {
                    Some(vid) => format!("{}-{}", pid, vid),
                    None => pid.clone(),
                };
                self.line(&format!("No data for {} in {}", subject, root.display()))
            }
            Comparison::Version(stats) => self.version_stats(stats),
        }
    }

    fn version_stats(&mut self, stats: &VersionStats) -> Result<()> {
        let codes = |codes: &[ResultCode]| {
            let parts: Vec<String> = codes.iter().map(|c| c.code().to_string()).collect();
            format!("[{}]", parts.join(","))
        };
        let h_all = format!("{:>6.3}", stats.entropy_all);
        let h_all = if stats.entropy_all > 0.0 {
            self.palette.alarm(&h_all)
        } else {
            h_all
        };
        self.line(&format!(
            "{:<10} {:<6} {:<24} {:<24} {:>6.3} {:>6.3} {}",
            stats.pid,
            stats.vid,
            codes(&stats.codes_a),
            codes(&stats.codes_b),
            stats.entropy_a,
            stats.entropy_b,
            h_all
        ))
    }

    // =========================================================================
    // compare
    // =========================================================================

    pub fn kill_report(
        &mut self,
        dirs: &[PathBuf],
        kill_file: &str,
        summary: &KillSummary,
    ) -> Result<()> {
        self.line("File summary")?;
        for (i, dir) in dirs.iter().enumerate() {
            self.line(&format!("{} {}", i + 1, dir.join(kill_file).display()))?;
        }

        let columns: Vec<String> = (1..=dirs.len()).map(|n| format!("{:^4}", n)).collect();
        self.line(&format!(" #  mut-id  {}", columns.join("  ")))?;

        for (count, row) in summary.rows.iter().enumerate() {
            let statuses: Vec<String> = row
                .statuses
                .iter()
                .map(|s| self.palette.kill_status(&format!("{:>4}", s)))
                .collect();
            let warn = if row.live_and_failure {
                self.palette.alarm("(!!!)")
            } else {
                String::new()
            };
            self.line(&format!(
                "{:>3} ({:>4}) {}    {}",
                count + 1,
                row.mutant,
                statuses.join("  "),
                warn
            ))?;
        }

        self.line(&format!(
            "non-deterministic: {}",
            ratio(summary.nondeterministic(), summary.total)
        ))?;
        self.line(&format!(
            " live and failure: {}",
            ratio(summary.live_and_failure(), summary.total)
        ))?;

        if !summary.live_runs.is_empty() {
            let runs: Vec<String> = summary.live_runs.iter().map(|r| r.to_string()).collect();
            self.line(&format!("runs reporting LIVE on a failure: {}", runs.join(", ")))?;
        }
        Ok(())
    }

    pub fn wrote_file(&mut self, path: &Path) -> Result<()> {
        self.line(&format!("Wrote {}", path.display()))
    }
}

fn ratio(part: usize, total: usize) -> String {
    let pct = if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    };
    format!("{}/{} ({:>5.1}%)", part, total, pct)
}
