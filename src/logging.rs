//! Diagnostic logging setup.
//!
//! Reports go to stdout; log lines always go to stderr so they never mix
//! into output that may be piped or redirected.

use tracing::Level;

/// Log level for the given `-v` count and `--quiet` flag.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(5, false), Level::DEBUG);
        assert_eq!(level_for(3, true), Level::ERROR);
    }
}
