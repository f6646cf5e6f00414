//! Implementation of the `mutdiff entropy` command.
//!
//! With one experiment root, lists each trial and the entropy of each
//! version's outcomes. With two, compares the roots version by version.

use crate::cli::EntropyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::experiment::{Experiment, entropy};
use crate::report::{Palette, Reporter};
use std::io::Write;
use tracing::info;

/// Execute the `mutdiff entropy` command.
pub fn cmd_entropy(args: EntropyArgs, config: &Config) -> Result<()> {
    let first = Experiment::load(&args.root)?;
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), Palette::new(config.color));

    match args.other {
        None => report_trials(&first, &mut reporter),
        Some(other) => {
            let second = Experiment::load(&other)?;
            report_comparison(&first, &second, &mut reporter)
        }
    }
}

/// Print every trial followed by each version's entropy.
pub fn report_trials<W: Write>(exp: &Experiment, reporter: &mut Reporter<W>) -> Result<()> {
    for (pid, versions) in &exp.data {
        for (vid, trials) in versions {
            for (tid, trial) in trials {
                reporter.trial(pid, vid, tid, trial)?;
            }
            reporter.entropy(entropy(&exp.codes(pid, vid)))?;
        }
    }
    Ok(())
}

/// Print the per-version comparison of two experiments.
pub fn report_comparison<W: Write>(
    a: &Experiment,
    b: &Experiment,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let rows = a.compare(b);
    info!(rows = rows.len(), "compared experiments");

    reporter.comparison_header(&a.root, &b.root)?;
    for row in &rows {
        reporter.comparison(row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn experiment(started: &str, status: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("started.csv"), started).unwrap();
        fs::write(dir.path().join("status.csv"), status).unwrap();
        dir
    }

    #[test]
    fn trials_are_listed_with_entropy() {
        let dir = experiment(
            "pid,vid,trial\nLang,1,1\nLang,1,2\n",
            "pid,vid,trial,start,end,res\nLang,1,1,a,b,0\nLang,1,2,c,d,124\n",
        );
        let exp = Experiment::load(dir.path()).unwrap();

        let mut reporter = Reporter::new(Vec::new(), Palette::plain());
        report_trials(&exp, &mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert_eq!(
            text,
            "Lang-1   (1) a-b: SUCCESS\nLang-1   (2) c-d: TIMEOUT\nH=1\n"
        );
    }

    #[test]
    fn comparison_lists_versions() {
        let a = experiment(
            "pid,vid,trial\nLang,1,1\n",
            "pid,vid,trial,start,end,res\nLang,1,1,a,b,0\n",
        );
        let b = experiment(
            "pid,vid,trial\nLang,1,1\nMath,2,1\n",
            "pid,vid,trial,start,end,res\nLang,1,1,a,b,1\n",
        );
        let exp_a = Experiment::load(a.path()).unwrap();
        let exp_b = Experiment::load(b.path()).unwrap();

        let mut reporter = Reporter::new(Vec::new(), Palette::plain());
        report_comparison(&exp_a, &exp_b, &mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("Lang       1      [0]"));
        assert!(text.contains("[2]"));
        assert!(text.contains(&format!("No data for Math in {}", a.path().display())));
    }
}
