//! Human-readable encode/decode report printed by the `lzw` binary.
//!
//! ```text
//! String: LZWLZ78LZ77LZCLZMWLZAP#
//! LZW-encoded: L Z W <256> 7 8 <259> 7 <256> C <256> M <258> Z A P #
//! Compression ratio: 23 -> 17 (73.913043%)
//! LZW-decoded: LZWLZ78LZ77LZCLZMWLZAP#
//! ```

use std::fmt::{self, Write as _};

use anyhow::{ensure, Context};

use crate::codec::{decode, encode, is_literal, Code};

/// Renders a code stream: literal codes as their character, learned codes
/// as `<n>`, each followed by a single space.
pub fn format_codes(codes: &[Code]) -> String {
    let mut out = String::with_capacity(codes.len() * 2);
    for &code in codes {
        if is_literal(code) {
            out.push(char::from(code as u8));
            out.push(' ');
        } else {
            // writing to a String cannot fail
            let _ = write!(out, "<{}> ", code);
        }
    }
    out
}

/// Result of running the codec over one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub input: Vec<u8>,
    pub codes: Vec<Code>,
    pub decoded: Vec<u8>,
}

impl Report {
    /// Encodes `input`, decodes the result and checks the round trip.
    pub fn build(input: &[u8]) -> anyhow::Result<Self> {
        let codes = encode(input).context("encoding failed")?;
        let decoded = if codes.is_empty() {
            Vec::new()
        } else {
            decode(&codes).context("decoding failed")?
        };
        ensure!(
            decoded == input,
            "round trip mismatch: {} bytes in, {} bytes out",
            input.len(),
            decoded.len()
        );
        Ok(Self {
            input: input.to_vec(),
            codes,
            decoded,
        })
    }

    /// `(encoded length / input length) * 100`, or 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        crate::compression_ratio(self.codes.len(), self.input.len())
    }

    /// Number of codes that refer to learned (multi-byte) patterns.
    pub fn learned_codes(&self) -> usize {
        self.codes.iter().filter(|&&c| !is_literal(c)).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "String: {}", String::from_utf8_lossy(&self.input))?;
        writeln!(f, "LZW-encoded: {}", format_codes(&self.codes))?;
        writeln!(
            f,
            "Compression ratio: {} -> {} ({:.6}%)",
            self.input.len(),
            self.codes.len(),
            self.ratio()
        )?;
        writeln!(f, "LZW-decoded: {}", String::from_utf8_lossy(&self.decoded))
    }
}
