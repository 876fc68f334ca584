// e2e/cli_integration.rs — CLI integration tests
//
// Drives the `lzw` binary as a black box with std::process::Command.
// Covers the printed report, exit codes, help/version handling, verbosity
// flags and the `--` separator.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `lzw` binary produced by Cargo.
fn lzw_bin() -> PathBuf {
    // CARGO_BIN_EXE_lzw is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Some(p) = option_env!("CARGO_BIN_EXE_lzw") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzw");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(lzw_bin())
        .args(args)
        .env_remove("LZW_DISPLAY_LEVEL")
        .output()
        .expect("failed to run lzw")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── 1. Report output ─────────────────────────────────────────────────────────

#[test]
fn test_cli_sample_string_report() {
    let out = run(&["LZWLZ78LZ77LZCLZMWLZAP#"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected output:\n{}", text);
    assert_eq!(lines[0], "String: LZWLZ78LZ77LZCLZMWLZAP#");
    assert_eq!(
        lines[1],
        "LZW-encoded: L Z W <256> 7 8 <259> 7 <256> C <256> M <258> Z A P # "
    );
    assert_eq!(lines[2], "Compression ratio: 23 -> 17 (73.913043%)");
    assert_eq!(lines[3], "LZW-decoded: LZWLZ78LZ77LZCLZMWLZAP#");
}

#[test]
fn test_cli_repetitive_input_report() {
    let out = run(&["aaaaaaaa"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("LZW-encoded: a <256> <257> <256> \n"));
    assert!(text.contains("Compression ratio: 8 -> 4 (50.000000%)"));
}

#[test]
fn test_cli_empty_string_argument() {
    let out = run(&[""]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Compression ratio: 0 -> 0 (0.000000%)"));
}

// ── 2. Usage and version ─────────────────────────────────────────────────────

#[test]
fn test_cli_no_argument_prints_usage() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_cli_help_prints_usage() {
    for flag in ["-h", "--help"] {
        let out = run(&[flag]);
        assert_eq!(out.status.code(), Some(1), "flag {}", flag);
        assert!(stderr(&out).contains("Usage"));
    }
}

#[test]
fn test_cli_version() {
    for flag in ["-V", "--version"] {
        let out = run(&[flag]);
        assert!(out.status.success(), "flag {}", flag);
        assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
    }
}

// ── 3. Bad usage ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_unknown_option_fails() {
    let out = run(&["--bogus", "abc"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("unknown option"), "stderr: {}", err);
    assert!(err.contains("Incorrect parameters"));
}

#[test]
fn test_cli_extra_argument_fails() {
    let out = run(&["abc", "def"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unexpected extra argument"));
}

// ── 4. Separator and verbosity ───────────────────────────────────────────────

#[test]
fn test_cli_double_dash_takes_dash_input() {
    let out = run(&["--", "-v"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("String: -v\n"));
}

#[test]
fn test_cli_verbose_adds_stats_on_stderr() {
    let out = run(&["-v", "abab"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("learned"));
    // the report itself is unchanged
    assert!(stdout(&out).contains("LZW-encoded: a b <256> \n"));
}

#[test]
fn test_cli_env_display_level() {
    let out = Command::new(lzw_bin())
        .arg("abab")
        .env("LZW_DISPLAY_LEVEL", "3")
        .output()
        .expect("failed to run lzw");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("learned"));
}
