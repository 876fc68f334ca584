// Integration tests for codec::dictionary — the public Dictionary surface.
//
// Covers:
//   - literal codes equal the byte value and never move the counter
//   - multi-byte codes start at 256 and increase by one, without gaps
//   - lookups by code and by pattern agree in both directions
//   - the 4096-entry capacity is enforced before anything is stored

use lzw::codec::{Code, Dictionary, LzwError, DICT_CAPACITY, FIRST_DICT_CODE};

#[test]
fn default_matches_new() {
    let d = Dictionary::default();
    assert!(d.is_empty());
    assert_eq!(d.next_code(), FIRST_DICT_CODE);
}

#[test]
fn codes_are_gap_free_from_256() {
    let mut d = Dictionary::new();
    let mut codes = Vec::new();
    for i in 0..100u16 {
        codes.push(d.insert(&[b'#', (i >> 8) as u8, i as u8]).unwrap());
    }
    let expected: Vec<Code> = (256..356).collect();
    assert_eq!(codes, expected);
}

#[test]
fn interleaved_literals_do_not_consume_codes() {
    let mut d = Dictionary::new();
    assert_eq!(d.insert(b"ab").unwrap(), 256);
    assert_eq!(d.insert(b"z").unwrap(), 122);
    assert_eq!(d.insert(b"cd").unwrap(), 257);
    assert_eq!(d.len(), 3);
    assert_eq!(d.literal_count(), 1);
}

#[test]
fn round_trip_between_lookups() {
    let mut d = Dictionary::new();
    for p in [&b"k"[..], &b"ke"[..], &b"key"[..], &b"keys"[..], &b"s"[..]] {
        let code = d.insert(p).unwrap();
        assert_eq!(d.find_by_code(code), Some(p));
        assert_eq!(d.find_by_pattern(p), Some(code));
    }
}

#[test]
fn exact_length_matching() {
    let mut d = Dictionary::new();
    d.insert(b"abc").unwrap();
    assert_eq!(d.find_by_pattern(b"ab"), None);
    assert_eq!(d.find_by_pattern(b"abcd"), None);
    assert_eq!(d.find_by_pattern(b"abc"), Some(256));
}

#[test]
fn extension_chain_matches_content_lookup() {
    let mut d = Dictionary::new();
    d.insert(b"t").unwrap();
    let mut code = 116;
    for &b in b"oken" {
        code = d.extend(code, b).unwrap();
    }
    assert_eq!(d.find_by_code(code), Some(&b"token"[..]));
    assert_eq!(d.find_by_pattern(b"token"), Some(code));
}

#[test]
fn capacity_with_single_literal() {
    let mut d = Dictionary::new();
    d.insert(b"a").unwrap();
    let mut code = 97;
    for _ in 1..DICT_CAPACITY {
        code = d.extend(code, b'a').unwrap();
    }
    assert_eq!(d.len(), DICT_CAPACITY);
    // 1 literal + 4095 learned patterns: the last code is 256 + 4094
    assert_eq!(code, 4350);
    assert_eq!(d.extend(code, b'a'), Err(LzwError::CapacityExceeded));
    assert_eq!(d.insert(b"b"), Err(LzwError::CapacityExceeded));
}
