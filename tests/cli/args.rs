// Integration tests for cli::args and cli::init — argument loop and startup state.

use lzw::cli::args::parse_args_from;
use lzw::cli::init::{detect_init, init_display_level_from, CliInit};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn init(level: u32) -> CliInit {
    CliInit {
        exe_name: "lzw".to_owned(),
        display_level: level,
    }
}

#[test]
fn init_strips_directories() {
    assert_eq!(detect_init("./target/debug/lzw").exe_name, "lzw");
}

#[test]
fn env_level_feeds_parser() {
    let level = init_display_level_from(Some("4"));
    let p = parse_args_from(init(level), &argv(&["-q", "abc"])).unwrap();
    assert_eq!(p.display_level, 3);
    assert_eq!(p.input.as_deref(), Some("abc"));
}

#[test]
fn input_may_contain_spaces() {
    let p = parse_args_from(init(2), &argv(&["hello world"])).unwrap();
    assert_eq!(p.input.as_deref(), Some("hello world"));
}

#[test]
fn flags_after_input_still_apply() {
    let p = parse_args_from(init(2), &argv(&["abc", "-v"])).unwrap();
    assert_eq!(p.display_level, 3);
}

#[test]
fn help_wins_over_input() {
    let p = parse_args_from(init(2), &argv(&["abc", "--help"])).unwrap();
    assert!(p.wants_usage());
}

#[test]
fn bad_usage_message() {
    let e = parse_args_from(init(2), &argv(&["-z"])).unwrap_err();
    assert_eq!(e.to_string(), "bad usage: unknown option: -z");
}
