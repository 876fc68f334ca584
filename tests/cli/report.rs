// Integration tests for cli::report — rendering of the encode/decode report.

use lzw::cli::report::{format_codes, Report};

#[test]
fn literal_codes_render_as_characters() {
    assert_eq!(format_codes(&[104, 105]), "h i ");
}

#[test]
fn learned_codes_render_in_angle_brackets() {
    assert_eq!(format_codes(&[97, 256, 4095]), "a <256> <4095> ");
}

#[test]
fn report_lines_in_order() {
    let report = Report::build(b"aaaaaaaa").unwrap();
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "String: aaaaaaaa",
            "LZW-encoded: a <256> <257> <256> ",
            "Compression ratio: 8 -> 4 (50.000000%)",
            "LZW-decoded: aaaaaaaa",
        ]
    );
}

#[test]
fn report_counts() {
    let report = Report::build(b"abcdefg").unwrap();
    assert_eq!(report.codes.len(), 7);
    assert_eq!(report.learned_codes(), 0);
    assert_eq!(report.ratio(), 100.0);
}

#[test]
fn report_on_oversized_input_is_an_error() {
    let mut input = vec![b'a'; 4096 * 4097 / 2];
    input.push(b'a');
    let err = Report::build(&input).unwrap_err();
    assert!(format!("{:#}", err).contains("dictionary capacity exceeded"));
}
