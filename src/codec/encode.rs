//! LZW encoder.
//!
//! The dictionary is seeded with exactly the distinct bytes of the input
//! (not the full 0–255 alphabet), then grown with one multi-byte entry per
//! mismatch in the classic greedy scan:
//!
//! ```text
//! P = ""
//! for c in input:
//!     if P+c in dict: P = P+c
//!     else:           add P+c; emit code(P); P = c
//! emit code(P)
//! ```
//!
//! `P` is tracked by its code only: `P+c` is looked up as the extension
//! `(code(P), c)`, so no pattern bytes are copied or hashed per input byte.
//!
//! Every call owns its [`Dictionary`]; nothing survives the call.

use super::dictionary::Dictionary;
use super::types::{Code, LzwError};

/// Worst-case number of codes produced for an input of `input_len` bytes.
///
/// Each emission consumes at least one input byte, so the code stream is
/// never longer than the input.
#[inline]
pub fn encode_bound(input_len: usize) -> usize {
    input_len
}

/// Seeds `dict` with a literal entry for every distinct byte in `input`.
fn seed_literals(dict: &mut Dictionary, input: &[u8]) -> Result<(), LzwError> {
    let mut seen = [false; 256];
    for &b in input {
        if !seen[b as usize] {
            seen[b as usize] = true;
            dict.insert(&[b])?;
        }
    }
    Ok(())
}

/// Core scan shared by [`encode`] and [`encode_into`].
///
/// Calls `emit` once per output code, in order, and returns the dictionary
/// the scan built. An error from `emit` or from the dictionary aborts the
/// scan immediately.
pub(crate) fn encode_with<F>(input: &[u8], mut emit: F) -> Result<Dictionary, LzwError>
where
    F: FnMut(Code) -> Result<(), LzwError>,
{
    let mut dict = Dictionary::new();
    seed_literals(&mut dict, input)?;

    // Code of the current pattern P; `None` only before the first byte.
    let mut current: Option<Code> = None;

    for &c in input {
        let Some(prefix) = current else {
            // every input byte was seeded as a literal
            current = Some(Code::from(c));
            continue;
        };

        match dict.find_extension(prefix, c) {
            Some(code) => current = Some(code),
            None => {
                dict.extend(prefix, c)?;
                emit(prefix)?;
                current = Some(Code::from(c));
            }
        }
    }

    if let Some(code) = current {
        emit(code)?;
    }

    Ok(dict)
}

/// Encodes `input` into a freshly allocated code stream.
///
/// An empty input yields an empty stream.
///
/// # Errors
/// * [`LzwError::CapacityExceeded`]: the input needs more than
///   [`DICT_CAPACITY`](super::types::DICT_CAPACITY) dictionary entries.
/// * [`LzwError::AllocationFailed`]: the output could not grow.
pub fn encode(input: &[u8]) -> Result<Vec<Code>, LzwError> {
    let mut codes: Vec<Code> = Vec::new();
    encode_with(input, |code| {
        codes.try_reserve(1)?;
        codes.push(code);
        Ok(())
    })?;
    Ok(codes)
}

/// Encodes `input` into the caller-supplied `dst` and returns the number of
/// codes written.
///
/// A `dst` of [`encode_bound`]`(input.len())` codes is always large enough.
/// On error the contents of `dst` are unspecified.
///
/// # Errors
/// * [`LzwError::OutputTooSmall`]: `dst` cannot hold every code.
/// * [`LzwError::CapacityExceeded`]: see [`encode`].
pub fn encode_into(input: &[u8], dst: &mut [Code]) -> Result<usize, LzwError> {
    let mut written = 0usize;
    encode_with(input, |code| {
        let slot = dst.get_mut(written).ok_or(LzwError::OutputTooSmall)?;
        *slot = code;
        written += 1;
        Ok(())
    })?;
    Ok(written)
}
