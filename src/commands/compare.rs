//! Implementation of the `mutdiff compare` command.
//!
//! Lines up `kill.csv` from several runs of the same mutation analysis and
//! lists the mutants whose status changed between runs. A mutant reported
//! live in one run and killed by a failing test in another is flagged.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::experiment::{KILL_FILE, KillMatrix};
use crate::report::{Palette, Reporter};
use std::path::PathBuf;
use tracing::warn;

/// Execute the `mutdiff compare` command.
pub fn cmd_compare(args: CompareArgs, config: &Config) -> Result<()> {
    let matrix = KillMatrix::load(&args.dirs)?;
    let summary = matrix.analyze(&config.live_status, &config.failure_statuses);

    if summary.live_and_failure() > 0 {
        warn!(
            count = summary.live_and_failure(),
            "mutants reported both live and killed"
        );
    }

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), Palette::new(config.color));
    reporter.kill_report(&matrix.dirs, KILL_FILE, &summary)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.results_csv));
    summary.write_csv_file(&output, &matrix.dirs)?;
    reporter.wrote_file(&output)
}
