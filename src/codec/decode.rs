//! LZW decoder.
//!
//! Rebuilds the encoder's dictionary from the code stream alone. Literal
//! entries are seeded from the literal codes that actually appear in the
//! stream; every code after the first then adds exactly one multi-byte entry,
//! in the same order and with the same codes the encoder assigned:
//!
//! * known code `k`: new entry is `last ++ pattern(k)[0]`;
//! * unknown `k` equal to the next code to be assigned (KwKwK): new entry is
//!   `last ++ last[0]`, and it is also the pattern `k` stands for.
//!
//! Any other unknown code, a non-literal first code, or an empty stream is
//! rejected with [`LzwError::MalformedInput`].

use super::dictionary::Dictionary;
use super::types::{is_literal, Code, LzwError};

/// Seeds `dict` with a literal entry for every distinct literal code present.
fn seed_literals(dict: &mut Dictionary, codes: &[Code]) -> Result<(), LzwError> {
    let mut seen = [false; 256];
    for &code in codes.iter().filter(|&&c| is_literal(c)) {
        if !seen[code as usize] {
            seen[code as usize] = true;
            dict.insert(&[code as u8])?;
        }
    }
    Ok(())
}

/// Core reconstruction loop shared by [`decode`] and [`decode_into`].
///
/// Hands each decoded pattern to `emit`, in order, and returns the rebuilt
/// dictionary.
pub(crate) fn decode_with<F>(codes: &[Code], mut emit: F) -> Result<Dictionary, LzwError>
where
    F: FnMut(&[u8]) -> Result<(), LzwError>,
{
    let (&first, rest) = codes.split_first().ok_or(LzwError::MalformedInput)?;
    if !is_literal(first) {
        return Err(LzwError::MalformedInput);
    }

    let mut dict = Dictionary::new();
    seed_literals(&mut dict, codes)?;

    let first_pattern = dict.find_by_code(first).ok_or(LzwError::MalformedInput)?;
    emit(first_pattern)?;

    let mut last = first;

    for &code in rest {
        let head = match dict.find_by_code(code) {
            Some(next) => next[0],
            None if code == dict.next_code() => {
                let last_pattern = dict.find_by_code(last).ok_or(LzwError::MalformedInput)?;
                last_pattern[0]
            }
            None => return Err(LzwError::MalformedInput),
        };

        match dict.extend(last, head) {
            Ok(_) => {}
            // only a stream the encoder never produced can repeat a pattern
            Err(LzwError::InvalidPattern) => return Err(LzwError::MalformedInput),
            Err(e) => return Err(e),
        }

        // in the KwKwK case `code` was assigned by the extension above
        let next = dict.find_by_code(code).ok_or(LzwError::MalformedInput)?;
        emit(next)?;
        last = code;
    }

    Ok(dict)
}

/// Decodes `codes` into a freshly allocated byte buffer.
///
/// # Errors
/// * [`LzwError::MalformedInput`]: empty stream, non-literal first code,
///   or a code the encoder could not have emitted at that position.
/// * [`LzwError::CapacityExceeded`]: reconstruction needs more than
///   [`DICT_CAPACITY`](super::types::DICT_CAPACITY) entries.
/// * [`LzwError::AllocationFailed`]: the output could not grow.
pub fn decode(codes: &[Code]) -> Result<Vec<u8>, LzwError> {
    let mut out: Vec<u8> = Vec::new();
    decode_with(codes, |pattern| {
        out.try_reserve(pattern.len())?;
        out.extend_from_slice(pattern);
        Ok(())
    })?;
    Ok(out)
}

/// Decodes `codes` into the caller-supplied `dst` and returns the number of
/// bytes written.
///
/// One code can expand to an arbitrarily long pattern, so no bound can be
/// derived from `codes.len()` alone; size `dst` generously or use [`decode`].
/// On error the contents of `dst` are unspecified.
///
/// # Errors
/// * [`LzwError::OutputTooSmall`]: `dst` cannot hold the decoded bytes.
/// * Any error of [`decode`].
pub fn decode_into(codes: &[Code], dst: &mut [u8]) -> Result<usize, LzwError> {
    let mut written = 0usize;
    decode_with(codes, |pattern| {
        let end = written + pattern.len();
        let slot = dst.get_mut(written..end).ok_or(LzwError::OutputTooSmall)?;
        slot.copy_from_slice(pattern);
        written = end;
        Ok(())
    })?;
    Ok(written)
}
