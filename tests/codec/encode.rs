// Integration tests for codec::encode.
//
// Covers:
//   - empty and single-byte inputs
//   - literal codes are byte values, learned codes are ≥ 256
//   - learned codes appear in first-use order without gaps
//   - encode_into agrees with encode and reports short buffers

use lzw::codec::{encode, encode_bound, encode_into, Code, LzwError};

#[test]
fn empty_input_yields_empty_stream() {
    assert_eq!(encode(b"").unwrap(), Vec::<Code>::new());
}

#[test]
fn single_byte_is_one_literal() {
    assert_eq!(encode(b"x").unwrap(), vec![b'x' as Code]);
    assert_eq!(encode(&[0]).unwrap(), vec![0]);
    assert_eq!(encode(&[255]).unwrap(), vec![255]);
}

#[test]
fn identical_bytes_compress() {
    // a, aa, aaa, aa
    assert_eq!(encode(b"aaaaaaaa").unwrap(), vec![97, 256, 257, 256]);
}

#[test]
fn no_repetition_emits_every_byte() {
    let codes = encode(b"abcdefg").unwrap();
    let expected: Vec<Code> = b"abcdefg".iter().map(|&b| Code::from(b)).collect();
    assert_eq!(codes, expected);
}

#[test]
fn sample_string_compresses() {
    let input = b"LZWLZ78LZ77LZCLZMWLZAP#";
    let codes = encode(input).unwrap();
    assert_eq!(
        codes,
        vec![76, 90, 87, 256, 55, 56, 259, 55, 256, 67, 256, 77, 258, 90, 65, 80, 35]
    );
    assert!(codes.len() < input.len());
}

#[test]
fn learned_codes_refer_to_earlier_entries() {
    let input: Vec<u8> = b"the quick brown fox jumps over the lazy dog. ".repeat(20);
    let codes = encode(&input).unwrap();
    // by emission i the encoder has learned codes 256..=256+i, and the newest
    // one is never the pattern being emitted
    for (i, &c) in codes.iter().enumerate() {
        if c >= 256 {
            assert!(usize::from(c) < 256 + i, "code {} at position {}", c, i);
        }
    }
    assert!(codes.iter().any(|&c| c >= 256));
}

#[test]
fn emission_bound_holds() {
    for input in [&b"a"[..], &b"ab"[..], &b"abab"[..], &b"mississippi"[..], &[0x00, 0xff, 0x00, 0xff][..]] {
        assert!(encode(input).unwrap().len() <= encode_bound(input.len()));
    }
}

#[test]
fn encode_into_matches_encode() {
    let input = b"TOBEORNOTTOBEORTOBEORNOT";
    let mut dst = vec![0 as Code; encode_bound(input.len())];
    let n = encode_into(input, &mut dst).unwrap();
    assert_eq!(&dst[..n], encode(input).unwrap().as_slice());
}

#[test]
fn encode_into_short_buffer() {
    let mut dst = [0 as Code; 2];
    assert_eq!(encode_into(b"abc", &mut dst), Err(LzwError::OutputTooSmall));
}

#[test]
fn encode_into_empty_input_needs_no_space() {
    let mut dst: [Code; 0] = [];
    assert_eq!(encode_into(b"", &mut dst), Ok(0));
}
