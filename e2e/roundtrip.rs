//! E2E Suite 01: Round-trip, determinism and emission bound
//!
//! Exercises the public `lzw::encode` / `lzw::decode` pair on a spread of
//! inputs: the reference strings, text, binary data, long runs and
//! pseudo-random bytes.
//!
//! Coverage:
//! - decode(encode(s)) == s
//! - encoding / decoding the same input twice gives identical output
//! - len(encode(s)) <= len(s)
//! - independent calls on separate threads agree with sequential calls

use lzw::{decode, encode, Code, FIRST_DICT_CODE};

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

fn corpus() -> Vec<Vec<u8>> {
    vec![
        b"".to_vec(),
        b"x".to_vec(),
        b"aaaaaaaa".to_vec(),
        b"abcdefg".to_vec(),
        b"LZWLZ78LZ77LZCLZMWLZAP#".to_vec(),
        b"TOBEORNOTTOBEORTOBEORNOT".to_vec(),
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(40).into_bytes(),
        "grüße, ünïcödé ✓ ".repeat(30).into_bytes(),
        vec![0u8; 5000],
        lcg_bytes(2000, b"ACGT", 7),
        lcg_bytes(1500, &(0..=255u8).collect::<Vec<u8>>(), 11),
    ]
}

fn round_trip(input: &[u8]) -> Vec<Code> {
    let codes = encode(input).expect("encode");
    if input.is_empty() {
        assert!(codes.is_empty(), "empty input must give an empty stream");
    } else {
        let decoded = decode(&codes).expect("decode");
        assert_eq!(decoded, input, "round trip must reproduce the input");
    }
    codes
}

// ═════════════════════════════════════════════════════════════════════════════
// Round trip
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_round_trip_corpus() {
    for input in corpus() {
        round_trip(&input);
    }
}

#[test]
fn test_sample_string_scenario() {
    let input = b"LZWLZ78LZ77LZCLZMWLZAP#";
    let codes = round_trip(input);
    assert!(codes.len() < input.len(), "repeated \"LZ\" must compress");
    assert!(codes.iter().any(|&c| c >= FIRST_DICT_CODE));
}

#[test]
fn test_single_character_literal_fidelity() {
    for b in [b'x', b'\0', 0xff] {
        let codes = round_trip(&[b]);
        assert_eq!(codes, vec![Code::from(b)]);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Determinism
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_encode_is_deterministic() {
    for input in corpus() {
        assert_eq!(encode(&input).unwrap(), encode(&input).unwrap());
    }
}

#[test]
fn test_decode_is_deterministic() {
    for input in corpus().into_iter().filter(|i| !i.is_empty()) {
        let codes = encode(&input).unwrap();
        assert_eq!(decode(&codes).unwrap(), decode(&codes).unwrap());
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Emission bound
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_emission_bound() {
    for input in corpus().into_iter().filter(|i| !i.is_empty()) {
        let codes = encode(&input).unwrap();
        assert!(codes.len() <= input.len());
    }
}

#[test]
fn test_no_repetition_is_not_compressed() {
    let input: Vec<u8> = (0..=255u8).collect();
    let codes = round_trip(&input);
    assert_eq!(codes.len(), input.len());
    assert!(codes.iter().all(|&c| c < FIRST_DICT_CODE));
}

// ═════════════════════════════════════════════════════════════════════════════
// Independent calls
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_concurrent_calls_share_nothing() {
    let inputs = corpus();
    let expected: Vec<Vec<Code>> = inputs.iter().map(|i| encode(i).unwrap()).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| s.spawn(move || round_trip(input)))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
