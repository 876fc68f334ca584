//! Shared codec types: the [`Code`] alias, the [`LzwError`] taxonomy and the
//! literal lookup table used to hand out single-byte patterns by reference.

use core::fmt;
use std::collections::TryReserveError;

pub use crate::config::{DICT_CAPACITY, FIRST_DICT_CODE, LITERAL_CODE_MAX};

/// One symbol of the code stream: a literal byte (0–255) or a learned
/// pattern (≥ [`FIRST_DICT_CODE`]).
pub type Code = u16;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by the dictionary, the encoder and the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzwError {
    /// Inserting another entry would grow the dictionary past
    /// [`DICT_CAPACITY`] entries.
    CapacityExceeded,
    /// The code stream cannot have been produced by the encoder: it is empty,
    /// starts with a non-literal code, or references a code that does not
    /// exist yet.
    MalformedInput,
    /// A dictionary insertion was given an empty pattern, or a pattern that
    /// is already present.
    InvalidPattern,
    /// The caller-supplied destination buffer is too short.
    OutputTooSmall,
    /// A growable buffer or table could not reserve memory.
    AllocationFailed,
}

impl LzwError {
    /// Short, stable, human-readable name of the error.
    pub fn error_name(&self) -> &'static str {
        match self {
            LzwError::CapacityExceeded => "dictionary capacity exceeded",
            LzwError::MalformedInput => "malformed code stream",
            LzwError::InvalidPattern => "invalid dictionary pattern",
            LzwError::OutputTooSmall => "destination buffer too small",
            LzwError::AllocationFailed => "allocation failed",
        }
    }
}

impl fmt::Display for LzwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_name())
    }
}

impl std::error::Error for LzwError {}

impl From<TryReserveError> for LzwError {
    fn from(_: TryReserveError) -> Self {
        LzwError::AllocationFailed
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal table
// ─────────────────────────────────────────────────────────────────────────────

/// `LITERAL_BYTES[b] == b` for every byte value, so the one-byte pattern of a
/// literal code can be returned as `&LITERAL_BYTES[b..=b]` without storing it.
pub(crate) static LITERAL_BYTES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// Returns `true` when `code` denotes a literal byte.
#[inline]
pub fn is_literal(code: Code) -> bool {
    code <= LITERAL_CODE_MAX
}
