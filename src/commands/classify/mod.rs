//! Implementation of the `mutdiff classify` command.
//!
//! Reads a unified diff, classifies every hunk of every modified file, and
//! reports the hunks whose class is selected for review. Added and deleted
//! files are summarized without classification.

#[cfg(test)]
mod tests;

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::diff::{FileDiff, FileStatus, Hunk, HunkClass, classify_hunk, parse_diff};
use crate::error::{MutdiffError, Result};
use crate::report::{Palette, Reporter};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// What to print and how much of it.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub classes: Vec<HunkClass>,
    pub max_lines: usize,
    pub json: bool,
}

impl ClassifyOptions {
    pub fn from_args(args: &ClassifyArgs, config: &Config) -> Self {
        let classes = if args.all {
            vec![
                HunkClass::LineNumsOnly,
                HunkClass::FailingTestHeader,
                HunkClass::Other,
            ]
        } else {
            config.report_classes.clone()
        };

        Self {
            classes,
            max_lines: args.max_lines.unwrap_or(config.max_body_lines),
            json: args.json,
        }
    }
}

#[derive(Serialize)]
struct ClassifiedHunk<'a> {
    #[serde(flatten)]
    hunk: &'a Hunk,
    /// None for hunks of added or deleted files, which are not classified.
    class: Option<HunkClass>,
}

#[derive(Serialize)]
struct ClassifiedFile<'a> {
    path_a: &'a str,
    path_b: &'a str,
    status: FileStatus,
    hunks: Vec<ClassifiedHunk<'a>>,
}

/// Execute the `mutdiff classify` command.
pub fn cmd_classify(args: ClassifyArgs, config: &Config) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let options = ClassifyOptions::from_args(&args, config);

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), Palette::new(config.color));
    let counts = classify_report(&text, &options, &mut reporter)?;

    info!(?counts, "classification finished");
    Ok(())
}

/// Parse, classify and report. Returns the number of hunks per class.
pub fn classify_report<W: Write>(
    text: &str,
    options: &ClassifyOptions,
    reporter: &mut Reporter<W>,
) -> Result<BTreeMap<&'static str, usize>> {
    let files = parse_diff(text)?;
    info!(files = files.len(), "parsed diff");

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut classified: Vec<ClassifiedFile<'_>> = Vec::with_capacity(files.len());

    for file in &files {
        let classes = classify_file(file)?;
        for class in classes.iter().flatten() {
            *counts.entry(class.as_str()).or_default() += 1;
        }

        if options.json {
            classified.push(ClassifiedFile {
                path_a: &file.path_a,
                path_b: &file.path_b,
                status: file.status,
                hunks: file
                    .hunks
                    .iter()
                    .zip(&classes)
                    .map(|(hunk, class)| ClassifiedHunk {
                        hunk,
                        class: *class,
                    })
                    .collect(),
            });
            continue;
        }

        if file.status != FileStatus::Modified {
            debug!(path = %file.path_b, status = %file.status, "not classifying");
            reporter.file_summary(file)?;
            continue;
        }

        let selected: Vec<(usize, &Hunk)> = file
            .hunks
            .iter()
            .zip(&classes)
            .enumerate()
            .filter(|(_, (_, class))| class.is_some_and(|c| options.classes.contains(&c)))
            .map(|(i, (hunk, _))| (i, hunk))
            .collect();

        if selected.is_empty() {
            continue;
        }

        reporter.file_summary(file)?;
        for (index, hunk) in selected {
            reporter.hunk(index, hunk, options.max_lines)?;
        }
    }

    if options.json {
        reporter.json(&classified)?;
    }

    Ok(counts)
}

/// Classes for every hunk of a modified file; `None` for each hunk of an
/// added or deleted file.
fn classify_file(file: &FileDiff) -> Result<Vec<Option<HunkClass>>> {
    if file.status != FileStatus::Modified {
        return Ok(vec![None; file.hunks.len()]);
    }
    file.hunks
        .iter()
        .map(|hunk| classify_hunk(hunk).map(Some))
        .collect()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            MutdiffError::UserError(format!("failed to read '{}': {}", path.display(), e))
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| MutdiffError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}
