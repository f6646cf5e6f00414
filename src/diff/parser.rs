//! Core diff parsing logic.

use crate::error::{MutdiffError, Result};
use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use super::helpers::{parse_diff_git_line, split_hunk_header};
use super::model::{FileDiff, FileStatus, Hunk};

type LineIter<'a> = Peekable<Enumerate<Lines<'a>>>;

/// Parse unified diff text into per-file hunk lists.
///
/// Expects `git diff` output: every file block opens with `diff --git`,
/// optionally followed by a `new file mode` / `deleted file mode` line, then
/// `index`, `---` and `+++` lines. Hunks follow, each opened by a `@@` range
/// header. Blank lines are ignored anywhere.
///
/// # Returns
///
/// * `Ok(Vec<FileDiff>)` - Files in input order (empty for empty input)
/// * `Err(MutdiffError)` - The first malformed or unrecognized line
pub fn parse_diff(text: &str) -> Result<Vec<FileDiff>> {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut lines: LineIter<'_> = text.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        let line_no = idx + 1;

        if line.starts_with("diff --git") {
            files.push(parse_file_header(line_no, line, &mut lines)?);
        } else if line.starts_with("@@") {
            let (header, rest) =
                split_hunk_header(line).ok_or_else(|| MutdiffError::MalformedHunkHeader {
                    line_no,
                    line: line.to_string(),
                })?;
            let file = files.last_mut().ok_or_else(|| MutdiffError::OrphanLine {
                line_no,
                context: "file diff",
                line: line.to_string(),
            })?;
            file.hunks.push(Hunk {
                header: header.to_string(),
                body: vec![rest.to_string()],
            });
        } else if line.starts_with([' ', '+', '-']) {
            match files.last_mut().and_then(|file| file.hunks.last_mut()) {
                Some(hunk) => hunk.body.push(line.to_string()),
                // Whitespace-only lines are blank outside a hunk.
                None if line.trim().is_empty() => {}
                None => {
                    return Err(MutdiffError::OrphanLine {
                        line_no,
                        context: "hunk",
                        line: line.to_string(),
                    });
                }
            }
        } else if !line.trim().is_empty() {
            return Err(MutdiffError::UnrecognizedLine {
                line_no,
                line: line.to_string(),
            });
        }
    }

    Ok(files)
}

/// Consume the marker lines following a `diff --git` line and open a new
/// file record.
fn parse_file_header(line_no: usize, line: &str, lines: &mut LineIter<'_>) -> Result<FileDiff> {
    let (path_a, path_b) =
        parse_diff_git_line(line).ok_or_else(|| MutdiffError::MalformedFileHeader {
            line_no,
            expected: "'diff --git <a> <b>'",
            found: line.to_string(),
        })?;

    let status = match lines.peek() {
        Some((_, next)) if next.starts_with("deleted file mode") => FileStatus::Deleted,
        Some((_, next)) if next.starts_with("new file mode") => FileStatus::Added,
        _ => FileStatus::Modified,
    };
    if status != FileStatus::Modified {
        lines.next();
    }

    expect_marker(lines, line_no, "index", "'index' line")?;
    expect_marker(lines, line_no, "---", "'---' line")?;
    expect_marker(lines, line_no, "+++", "'+++' line")?;

    Ok(FileDiff {
        path_a,
        path_b,
        status,
        hunks: Vec::new(),
    })
}

/// Require the next line to start with `prefix`.
///
/// At end of input the error points at the `diff --git` line being read.
fn expect_marker(
    lines: &mut LineIter<'_>,
    header_line_no: usize,
    prefix: &str,
    expected: &'static str,
) -> Result<()> {
    match lines.next() {
        Some((_, line)) if line.starts_with(prefix) => Ok(()),
        Some((idx, line)) => Err(MutdiffError::MalformedFileHeader {
            line_no: idx + 1,
            expected,
            found: line.to_string(),
        }),
        None => Err(MutdiffError::MalformedFileHeader {
            line_no: header_line_no,
            expected,
            found: "end of input".to_string(),
        }),
    }
}
