//! Command-line interface for the `lzw` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the `DISPLAY_LEVEL` atomic and the display macros. |
//! | [`help`]      | Usage / version printers and the `print_bad_usage` exit helper. |
//! | [`arg_utils`] | Path basename and integer parsing helpers. |
//! | [`init`]      | `CliInit` — starting state from `argv[0]` and `LZW_DISPLAY_LEVEL`. |
//! | [`args`]      | `ParsedArgs` — the argument loop over `argv[1..]`. |
//! | [`report`]    | `Report` — runs the codec and renders the encoded / decoded report. |
//!
//! Typical call sequence: `detect_init` → `parse_args` → `Report::build`.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod init;
pub mod args;
pub mod report;
