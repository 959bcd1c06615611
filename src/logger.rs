//! Console output levels.
//!
//! Progress goes to stdout and diagnostics to stderr. The level is set once
//! from the command line and read by the macros below.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verbosity {
    /// Summary and errors only
    Quiet = 0,
    Normal = 1,
    /// Adds strategy and per-file byte sizes
    Verbose = 2,
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

pub fn verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Quiet,
        2 => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

#[doc(hidden)]
pub fn enabled(level: Verbosity) -> bool {
    verbosity() >= level
}

/// Progress output on stdout, silenced by `--quiet`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Verbosity::Normal) {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Verbosity::Verbose) {
            println!("  {}", format!($($arg)*));
        }
    };
}

/// Fatal diagnostics on stderr. Never silenced.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("Error: {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Verbosity::Normal) {
            eprintln!("{}  {}", $crate::constants::WARNING_PREFIX, format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the global level is never raced by another test.
    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity(), Verbosity::Normal);
        assert!(enabled(Verbosity::Normal));
        assert!(!enabled(Verbosity::Verbose));

        set_verbosity(Verbosity::Quiet);
        assert!(!enabled(Verbosity::Normal));
        assert!(enabled(Verbosity::Quiet));

        set_verbosity(Verbosity::Verbose);
        assert!(enabled(Verbosity::Normal));
        assert!(enabled(Verbosity::Verbose));

        set_verbosity(Verbosity::Normal);
    }
}
