//! ANSI styling for terminal reports.
//!
//! All escape codes live here so that nothing outside `report` needs to know
//! whether color is on.

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const BOLD_RED: &str = "\x1b[91;1m";

/// Applies colors when enabled and passes text through untouched otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn alarm(&self, text: &str) -> String {
        self.paint(BOLD_RED, text)
    }

    /// Color for a trial outcome label.
    pub fn trial(&self, label: &str) -> String {
        let code = match label {
            "SUCCESS" => "\x1b[1;32m",
            "TIMEOUT" => "\x1b[1;34m",
            _ => "\x1b[1;31m",
        };
        self.paint(code, label)
    }

    /// Color for a kill.csv status. `text` may be padded; the status is
    /// matched on its trimmed form. Unknown statuses stay uncolored.
    pub fn kill_status(&self, text: &str) -> String {
        let code = match text.trim() {
            "LIVE" => "\x1b[92;1m",
            "EXC" => "\x1b[91;1m",
            "FAIL" => "\x1b[93;1m",
            "TIME" => "\x1b[94;1m",
            "NA" => "\x1b[95;1m",
            _ => return text.to_string(),
        };
        self.paint(code, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_passes_text_through() {
        let p = Palette::plain();
        assert_eq!(p.bold("x"), "x");
        assert_eq!(p.trial("SUCCESS"), "SUCCESS");
        assert_eq!(p.kill_status("LIVE"), "LIVE");
    }

    #[test]
    fn enabled_palette_wraps_in_escape_codes() {
        let p = Palette::new(true);
        assert_eq!(p.trial("TIMEOUT"), "\x1b[1;34mTIMEOUT\x1b[0m");
        assert_eq!(p.kill_status(" EXC"), "\x1b[91;1m EXC\x1b[0m");
    }

    #[test]
    fn unknown_kill_status_is_not_colored() {
        let p = Palette::new(true);
        assert_eq!(p.kill_status("WEIRD"), "WEIRD");
    }
}
