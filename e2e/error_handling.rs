//! E2E Suite 02: Error handling and capacity boundary
//!
//! Verifies that every failure surfaces as a typed `LzwError` and that the
//! 4096-entry dictionary bound is enforced exactly, on both sides.
//!
//! Coverage:
//! - an input needing exactly 4096 entries encodes and decodes
//! - one more byte needing a 4097th entry fails with CapacityExceeded
//! - a code stream forcing a 4097th decoder entry fails the same way
//! - malformed streams and undersized destination buffers

use lzw::{
    decode, decode_into, encode, encode_into, Code, LzwError, DICT_CAPACITY, FIRST_DICT_CODE,
};

/// Deterministic pseudo-random bytes drawn from `alphabet`.
fn lcg_bytes(len: usize, alphabet: &[u8], seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            alphabet[(state >> 24) as usize % alphabet.len()]
        })
        .collect()
}

/// Number of dictionary entries the encoder built for `input`: one literal
/// per distinct byte plus one learned pattern per emission but the last.
fn entries_for(input: &[u8], codes: &[Code]) -> usize {
    let mut seen = [false; 256];
    input.iter().for_each(|&b| seen[b as usize] = true);
    let literals = seen.iter().filter(|&&s| s).count();
    literals + codes.len() - 1
}

// ═════════════════════════════════════════════════════════════════════════════
// Capacity boundary: encoder
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_capacity_boundary_random_input() {
    // Both alphabet bytes up front so the literal set never changes.
    let mut data = b"ab".to_vec();
    data.extend(lcg_bytes(200_000, b"ab", 0x2545_F491));
    assert_eq!(encode(&data), Err(LzwError::CapacityExceeded));

    // Longest prefix that still fits: failure is monotone in the prefix length.
    let (mut lo, mut hi) = (2usize, data.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        match encode(&data[..mid]) {
            Ok(_) => lo = mid,
            Err(e) => {
                assert_eq!(e, LzwError::CapacityExceeded);
                hi = mid;
            }
        }
    }

    let fits = &data[..lo];
    let codes = encode(fits).unwrap();
    assert_eq!(entries_for(fits, &codes), DICT_CAPACITY);
    assert_eq!(decode(&codes).unwrap(), fits);

    assert_eq!(encode(&data[..hi]), Err(LzwError::CapacityExceeded));
}

#[test]
fn test_capacity_boundary_single_byte_run() {
    // "a" × T(k) is emitted as runs of length 1, 2, …, k: k codes, k entries.
    let k = DICT_CAPACITY;
    let run = k * (k + 1) / 2;
    let input = vec![b'a'; run];

    let codes = encode(&input).unwrap();
    assert_eq!(codes.len(), k);
    assert_eq!(entries_for(&input, &codes), DICT_CAPACITY);
    assert_eq!(codes[0], Code::from(b'a'));
    assert_eq!(codes[1], FIRST_DICT_CODE);
    assert_eq!(decode(&codes).unwrap(), input);

    let mut longer = input;
    longer.push(b'a');
    assert_eq!(encode(&longer), Err(LzwError::CapacityExceeded));
}

// ═════════════════════════════════════════════════════════════════════════════
// Capacity boundary: decoder
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_decoder_capacity_boundary() {
    // 'a' followed by KwKwK codes 256, 257, …: one new entry per code.
    let mut codes: Vec<Code> = vec![Code::from(b'a')];
    codes.extend((0..(DICT_CAPACITY - 1) as Code).map(|i| FIRST_DICT_CODE + i));
    let out = decode(&codes).unwrap();
    assert_eq!(out.len(), DICT_CAPACITY * (DICT_CAPACITY + 1) / 2);
    assert!(out.iter().all(|&b| b == b'a'));

    let next = *codes.last().unwrap() + 1;
    codes.push(next);
    assert_eq!(decode(&codes), Err(LzwError::CapacityExceeded));
}

// ═════════════════════════════════════════════════════════════════════════════
// Malformed streams
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_decode_empty_stream() {
    assert_eq!(decode(&[]), Err(LzwError::MalformedInput));
}

#[test]
fn test_decode_non_literal_first_code() {
    assert_eq!(decode(&[FIRST_DICT_CODE]), Err(LzwError::MalformedInput));
    assert_eq!(decode(&[4095, 65]), Err(LzwError::MalformedInput));
}

#[test]
fn test_decode_code_ahead_of_dictionary() {
    let mut codes = encode(b"LZWLZ78LZ77LZCLZMWLZAP#").unwrap();
    codes.push(FIRST_DICT_CODE + 100);
    assert_eq!(decode(&codes), Err(LzwError::MalformedInput));
}

// ═════════════════════════════════════════════════════════════════════════════
// Destination sizing
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_encode_into_too_small() {
    let input = b"abcdefg";
    let mut dst = vec![0 as Code; input.len() - 1];
    assert_eq!(encode_into(input, &mut dst), Err(LzwError::OutputTooSmall));
}

#[test]
fn test_decode_into_too_small() {
    let codes = encode(b"aaaaaaaa").unwrap();
    let mut dst = [0u8; 7];
    assert_eq!(decode_into(&codes, &mut dst), Err(LzwError::OutputTooSmall));
}

#[test]
fn test_errors_display() {
    for e in [
        LzwError::CapacityExceeded,
        LzwError::MalformedInput,
        LzwError::InvalidPattern,
        LzwError::OutputTooSmall,
        LzwError::AllocationFailed,
    ] {
        assert!(!e.to_string().is_empty());
        let boxed: Box<dyn std::error::Error> = Box::new(e);
        assert_eq!(boxed.to_string(), e.to_string());
    }
}
