//! Helper functions for diff parsing and classification.

/// Split the path tokens out of a `diff --git a/<path> b/<path>` line.
///
/// The line must consist of exactly four whitespace-separated tokens.
/// Returns `(path_a, path_b)` or None if the shape does not match.
pub(super) fn parse_diff_git_line(line: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["diff", "--git", a, b] => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

/// Split a hunk header line into the `@@ ... @@` marker and the remainder.
///
/// The closing `@@` is searched for starting after the opening one, so
/// `"@@ -1,2 +1,2 @@ fn main() {"` yields `("@@ -1,2 +1,2 @@", " fn main() {")`.
pub(super) fn split_hunk_header(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("@@")?;
    let close = rest.find("@@")? + 4;
    Some(line.split_at(close))
}

/// Length in bytes of the longest common prefix, on char boundaries.
pub(super) fn common_prefix_len(left: &str, right: &str) -> usize {
    left.char_indices()
        .zip(right.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| shorter_len(left, right))
}

/// Length in bytes of the longest common suffix, on char boundaries.
pub(super) fn common_suffix_len(left: &str, right: &str) -> usize {
    let mut len = 0;
    for (a, b) in left.chars().rev().zip(right.chars().rev()) {
        if a != b {
            break;
        }
        len += a.len_utf8();
    }
    len
}

fn shorter_len(left: &str, right: &str) -> usize {
    if left.len() <= right.len() {
        left.len()
    } else {
        right.len()
    }
}

/// Locate the differing middle section of two strings.
///
/// Returns byte ranges `(start, left_end, right_end)` such that
/// `left[start..left_end]` and `right[start..right_end]` are the parts not
/// covered by the common prefix and suffix. The suffix never overlaps the
/// prefix, and the window is widened over neighbouring ASCII digits so a
/// number split between the common and differing parts is kept whole.
pub(super) fn differing_middle(left: &str, right: &str) -> (usize, usize, usize) {
    let mut start = common_prefix_len(left, right);
    let max_suffix = shorter_len(left, right) - start;
    let mut suffix = common_suffix_len(left, right).min(max_suffix);

    // Prefix bytes are shared, so checking `left` is enough.
    while start > 0 && left.as_bytes()[start - 1].is_ascii_digit() {
        start -= 1;
    }
    while suffix > 0 && left.as_bytes()[left.len() - suffix].is_ascii_digit() {
        suffix -= 1;
    }

    (start, left.len() - suffix, right.len() - suffix)
}

/// Whether `text` reads as an integer: optional surrounding whitespace, an
/// optional sign, then at least one ASCII digit. No width limit.
pub(super) fn is_integer(text: &str) -> bool {
    let text = text.trim();
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
