// lzw — LZW dictionary codec over in-memory byte buffers

pub mod codec;
pub mod config;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZW_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version_string() -> &'static str {
    LZW_VERSION_STRING
}

/// Size of an encoded stream relative to its input, in percent:
/// `(encoded_len / input_len) * 100`.
///
/// Returns `0.0` for an empty input rather than dividing by zero.
pub fn compression_ratio(encoded_len: usize, input_len: usize) -> f64 {
    if input_len == 0 {
        return 0.0;
    }
    encoded_len as f64 / input_len as f64 * 100.0
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::{
    decode, decode_into, encode, encode_bound, encode_into, Code, Dictionary, LzwError,
    DICT_CAPACITY, FIRST_DICT_CODE,
};
