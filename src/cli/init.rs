//! CLI initialization: program name and environment-derived defaults.
//!
//! [`detect_init`] runs before any flag parsing and returns a [`CliInit`]
//! carrying the starting display level. The argument parser in
//! [`crate::cli::args`] then layers `-v` / `-q` on top of it.

use crate::cli::arg_utils::{last_name_from_path, read_u32_from_str};
use crate::cli::constants::{DISPLAY_LEVEL_MAX, ENV_DISPLAY_LEVEL, PROGRAM_NAME};
use crate::config::DISPLAY_LEVEL_DEFAULT;

/// Initial CLI state derived from `argv[0]` and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// Basename of `argv[0]`, used in usage text.
    pub exe_name: String,
    /// Starting display level from `LZW_DISPLAY_LEVEL` (or the default).
    pub display_level: u32,
}

/// Builds the initial CLI state from `argv0` and the process environment.
///
/// `argv0` may be a full path; only the basename is kept. An empty `argv0`
/// falls back to the program name.
pub fn detect_init(argv0: &str) -> CliInit {
    let exe_name = match last_name_from_path(argv0) {
        "" => PROGRAM_NAME,
        name => name,
    };
    CliInit {
        exe_name: exe_name.to_owned(),
        display_level: init_display_level(),
    }
}

/// Reads the starting display level from the `LZW_DISPLAY_LEVEL` environment variable.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`]: parse an optional `LZW_DISPLAY_LEVEL` value.
///
/// Values above the maximum level are clamped. A non-numeric value is
/// reported (at the current display level) and ignored.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        if let Some((val, "")) = read_u32_from_str(env) {
            return val.min(DISPLAY_LEVEL_MAX);
        }
        crate::displaylevel!(
            2,
            "Ignore environment variable setting {}={}: not a valid unsigned value \n",
            ENV_DISPLAY_LEVEL,
            env
        );
    }
    DISPLAY_LEVEL_DEFAULT
}
