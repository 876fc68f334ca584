// Integration tests for codec::decode.
//
// Covers:
//   - round trips for the reference inputs
//   - explicit resolution of the first code
//   - the KwKwK case
//   - rejection of streams the encoder cannot produce
//   - decode_into sizing

use lzw::codec::{decode, decode_into, encode, Code, LzwError};

fn round_trip(input: &[u8]) {
    let codes = encode(input).unwrap();
    if input.is_empty() {
        assert!(codes.is_empty());
        return;
    }
    assert_eq!(decode(&codes).unwrap(), input);
}

#[test]
fn reference_inputs_round_trip() {
    round_trip(b"");
    round_trip(b"x");
    round_trip(b"aaaaaaaa");
    round_trip(b"abcdefg");
    round_trip(b"LZWLZ78LZ77LZCLZMWLZAP#");
    round_trip(b"TOBEORNOTTOBEORTOBEORNOT");
}

#[test]
fn binary_bytes_round_trip() {
    let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).cycle().take(3000).collect();
    round_trip(&input);
}

#[test]
fn nul_bytes_are_ordinary_data() {
    round_trip(&[0, 0, 0, 1, 0, 0, 0, 1, 0]);
}

#[test]
fn first_code_is_resolved_by_value() {
    // the first code is 'b' even though 'a' is the smallest literal present
    assert_eq!(decode(&[98, 97]).unwrap(), b"ba");
}

#[test]
fn single_literal_code() {
    assert_eq!(decode(&[b'x' as Code]).unwrap(), b"x");
}

#[test]
fn kwkwk_case() {
    // "abababa" → a b <256> <258>; <258> is "aba", built from "ab" + 'a'
    let codes = encode(b"abababa").unwrap();
    assert_eq!(codes, vec![97, 98, 256, 258]);
    assert_eq!(decode(&codes).unwrap(), b"abababa");
}

#[test]
fn empty_stream_rejected() {
    assert_eq!(decode(&[]), Err(LzwError::MalformedInput));
}

#[test]
fn learned_first_code_rejected() {
    assert_eq!(decode(&[256, 97]), Err(LzwError::MalformedInput));
    assert_eq!(decode(&[Code::MAX]), Err(LzwError::MalformedInput));
}

#[test]
fn unknown_code_rejected() {
    assert_eq!(decode(&[97, 98, 300]), Err(LzwError::MalformedInput));
}

#[test]
fn decode_into_exact_fit() {
    let input = b"LZWLZ78LZ77LZCLZMWLZAP#";
    let codes = encode(input).unwrap();
    let mut dst = vec![0u8; input.len()];
    assert_eq!(decode_into(&codes, &mut dst), Ok(input.len()));
    assert_eq!(&dst, input);
}

#[test]
fn decode_into_too_small() {
    let input = b"LZWLZ78LZ77LZCLZMWLZAP#";
    let codes = encode(input).unwrap();
    let mut dst = vec![0u8; input.len() - 1];
    assert_eq!(decode_into(&codes, &mut dst), Err(LzwError::OutputTooSmall));
}
