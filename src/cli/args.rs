//! Command-line argument parsing for the `lzw` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Short flags may be aggregated (e.g. `-vv`). A bare `--` marks the end of
//! options, so an input string starting with `-` can still be passed. A lone
//! `-` is an ordinary input string.
//!
//! Bad or unrecognised options return an `Err` whose message begins with
//! `"bad usage: "`.

use anyhow::{anyhow, bail};

use crate::cli::constants::DISPLAY_LEVEL_MAX;
use crate::cli::init::CliInit;

/// Options and input collected by the argument parsing loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// The string to encode, if one was given.
    pub input: Option<String>,
    /// Display level after applying `-v` / `-q`.
    pub display_level: u32,
    /// `-h` / `--help` was given.
    pub help: bool,
    /// `-V` / `--version` was given.
    pub version: bool,
    /// Program name (argv[0] basename), used by help functions.
    pub exe_name: String,
}

impl ParsedArgs {
    /// `true` when the usage text must be shown instead of running the codec.
    pub fn wants_usage(&self) -> bool {
        self.help || self.input.is_none()
    }
}

/// Parse `std::env::args()` (skipping argv[0]) using `init` as the starting state.
pub fn parse_args(init: CliInit) -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(init, &argv)
}

/// Parse an explicit argument list (argv[1..]) using `init` as the starting state.
pub fn parse_args_from(init: CliInit, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let CliInit {
        exe_name,
        display_level,
    } = init;

    let mut parsed = ParsedArgs {
        input: None,
        display_level,
        help: false,
        version: false,
        exe_name,
    };
    let mut options_done = false;

    for argument in argv {
        let arg = argument.as_str();

        if options_done || arg == "-" || !arg.starts_with('-') {
            if parsed.input.is_some() {
                bail!("bad usage: unexpected extra argument: {}", arg);
            }
            parsed.input = Some(argument.clone());
            continue;
        }

        if arg == "--" {
            options_done = true;
            continue;
        }

        if let Some(long) = arg.strip_prefix("--") {
            match long {
                "help" => parsed.help = true,
                "version" => parsed.version = true,
                "verbose" => parsed.raise_level(),
                "quiet" => parsed.lower_level(),
                _ => return Err(anyhow!("bad usage: unknown option: {}", arg)),
            }
            continue;
        }

        for flag in arg[1..].chars() {
            match flag {
                'h' | 'H' => parsed.help = true,
                'V' => parsed.version = true,
                'v' => parsed.raise_level(),
                'q' => parsed.lower_level(),
                _ => return Err(anyhow!("bad usage: unknown option: -{}", flag)),
            }
        }
    }

    Ok(parsed)
}

impl ParsedArgs {
    fn raise_level(&mut self) {
        self.display_level = (self.display_level + 1).min(DISPLAY_LEVEL_MAX);
    }

    fn lower_level(&mut self) {
        self.display_level = self.display_level.saturating_sub(1);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
