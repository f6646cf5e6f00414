//! CLI argument parsing for mutdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// mutdiff: triage tooling for mutation analysis experiments.
///
/// - `classify` sorts the hunks of a diff between two runs' outputs into
///   line-number noise, failing-test banners, and real differences
/// - `entropy` measures how consistently trials of an experiment ended
/// - `compare` lines up mutant kill results from several runs
#[derive(Parser, Debug)]
#[command(name = "mutdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Parser, Debug)]
pub struct GlobalArgs {
    /// Path to a YAML config file (default: ./.mutdiff.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors in reports.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands for mutdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify the hunks of a unified diff.
    ///
    /// Reads the diff from FILE or standard input and reports the hunks
    /// that are not explained by line-number drift or failing-test banners.
    Classify(ClassifyArgs),

    /// Report result entropy across repeated trials.
    ///
    /// With one experiment root, lists every trial and the entropy per
    /// version. With two, compares the roots version by version.
    Entropy(EntropyArgs),

    /// Compare mutant kill status across runs.
    ///
    /// Each directory must contain a kill.csv. Mutants whose status differs
    /// between runs are listed and written to a results CSV.
    Compare(CompareArgs),
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Diff file to read (default: standard input).
    pub file: Option<PathBuf>,

    /// Report hunks of every class, not only the configured ones.
    #[arg(long)]
    pub all: bool,

    /// Maximum number of body lines printed per hunk.
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Emit parsed files and hunk classes as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `entropy` command.
#[derive(Parser, Debug)]
pub struct EntropyArgs {
    /// Experiment root containing started.csv and status.csv.
    pub root: PathBuf,

    /// Second experiment root to compare against.
    pub other: Option<PathBuf>,
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Run directories, each containing a kill.csv.
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,

    /// Where to write the CSV of non-deterministic mutants.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_classify_from_stdin() {
        let cli = Cli::try_parse_from(["mutdiff", "classify"]).unwrap();
        if let Command::Classify(args) = cli.command {
            assert!(args.file.is_none());
            assert!(!args.all);
            assert!(!args.json);
            assert_eq!(args.max_lines, None);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn parse_classify_full() {
        let cli = Cli::try_parse_from([
            "mutdiff",
            "classify",
            "run.diff",
            "--all",
            "--max-lines",
            "5",
            "--no-color",
            "-vv",
        ])
        .unwrap();
        assert!(cli.global.no_color);
        assert_eq!(cli.global.verbose, 2);
        if let Command::Classify(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("run.diff")));
            assert!(args.all);
            assert_eq!(args.max_lines, Some(5));
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn parse_entropy_with_two_roots() {
        let cli = Cli::try_parse_from(["mutdiff", "entropy", "major7", "major8"]).unwrap();
        if let Command::Entropy(args) = cli.command {
            assert_eq!(args.root, PathBuf::from("major7"));
            assert_eq!(args.other, Some(PathBuf::from("major8")));
        } else {
            panic!("Expected Entropy command");
        }
    }

    #[test]
    fn parse_compare_requires_dirs() {
        assert!(Cli::try_parse_from(["mutdiff", "compare"]).is_err());

        let cli =
            Cli::try_parse_from(["mutdiff", "compare", "run1", "run2", "-o", "out.csv"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.dirs.len(), 2);
            assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mutdiff", "-q", "-v", "classify"]).is_err());
    }
}
