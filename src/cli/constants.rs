// cli/constants.rs — Program identity strings, the display-level global and
// the display macros shared by the `lzw` binary.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "lzw";
pub const AUTHOR: &str = "the lzw authors";

/// Environment variable read at startup for the initial display level.
pub const ENV_DISPLAY_LEVEL: &str = "LZW_DISPLAY_LEVEL";

/// Highest meaningful display level.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = statistics; 4 = verbose
//
// The encoded/decoded report itself goes to stdout and is not gated; only
// diagnostics on stderr are.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_constant() {
        assert_eq!(PROGRAM_NAME, "lzw");
    }

    #[test]
    fn display_level_round_trips() {
        // other tests may touch the global; restore it afterwards
        let prev = display_level();
        assert!(prev <= DISPLAY_LEVEL_MAX);
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
