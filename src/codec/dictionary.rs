//! Bidirectional code ↔ pattern table built during one encode or decode call.
//!
//! Literal entries (codes 0–255) are tracked by a presence table and served
//! from the static literal table; multi-byte entries live in a vector indexed
//! by `code - FIRST_DICT_CODE`, a hash map keyed by pattern content, and a
//! `(prefix code, byte)` map used by the encoder and decoder to grow patterns
//! one byte at a time without rehashing them. All lookups are O(1) amortized
//! except [`Dictionary::find_by_pattern`], which hashes its argument.
//!
//! Entries are only ever appended. The entry count (literals included) never
//! exceeds [`DICT_CAPACITY`]; the check happens before anything is stored.

use std::collections::HashMap;

use super::types::{Code, LzwError, DICT_CAPACITY, FIRST_DICT_CODE, LITERAL_BYTES};

/// Append-only LZW symbol table.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// `literals[b]` is set once the single-byte pattern `[b]` was inserted.
    literals: [bool; 256],
    literal_count: usize,
    /// Multi-byte patterns in code order; `multi[i]` has code `256 + i`.
    multi: Vec<Box<[u8]>>,
    /// Pattern content → code, for multi-byte patterns only.
    by_pattern: HashMap<Box<[u8]>, Code>,
    /// `(code of pattern[..n-1], pattern[n-1])` → code of `pattern`, recorded
    /// whenever the prefix was already present at insertion time.
    extensions: HashMap<(Code, u8), Code>,
    next_code: Code,
}

impl Dictionary {
    /// Creates an empty dictionary whose first multi-byte code will be 256.
    pub fn new() -> Self {
        Self {
            literals: [false; 256],
            literal_count: 0,
            multi: Vec::new(),
            by_pattern: HashMap::new(),
            extensions: HashMap::new(),
            next_code: FIRST_DICT_CODE,
        }
    }

    /// Adds `pattern` and returns its code.
    ///
    /// A one-byte pattern becomes a literal entry whose code is the byte
    /// value. A longer pattern takes the next unused code starting at 256.
    ///
    /// # Errors
    /// * [`LzwError::InvalidPattern`]: `pattern` is empty or already present.
    /// * [`LzwError::CapacityExceeded`]: the table already holds
    ///   [`DICT_CAPACITY`] entries.
    /// * [`LzwError::AllocationFailed`]: storage could not grow.
    pub fn insert(&mut self, pattern: &[u8]) -> Result<Code, LzwError> {
        match *pattern {
            [] => Err(LzwError::InvalidPattern),
            [byte] => self.insert_literal(byte),
            _ => {
                let mut owned = Vec::new();
                owned.try_reserve_exact(pattern.len())?;
                owned.extend_from_slice(pattern);
                self.insert_multi(owned)
            }
        }
    }

    /// Adds the pattern `find_by_code(prefix) ++ [byte]` and returns its code.
    ///
    /// # Errors
    /// * [`LzwError::InvalidPattern`]: `prefix` is unknown, or the extended
    ///   pattern is already present.
    /// * Otherwise as [`Dictionary::insert`].
    pub fn extend(&mut self, prefix: Code, byte: u8) -> Result<Code, LzwError> {
        let base = self.find_by_code(prefix).ok_or(LzwError::InvalidPattern)?;
        let mut owned = Vec::new();
        owned.try_reserve_exact(base.len() + 1)?;
        owned.extend_from_slice(base);
        owned.push(byte);
        self.insert_multi(owned)
    }

    fn insert_literal(&mut self, byte: u8) -> Result<Code, LzwError> {
        if self.literals[byte as usize] {
            return Err(LzwError::InvalidPattern);
        }
        if self.len() >= DICT_CAPACITY {
            return Err(LzwError::CapacityExceeded);
        }
        self.literals[byte as usize] = true;
        self.literal_count += 1;
        Ok(Code::from(byte))
    }

    fn insert_multi(&mut self, owned: Vec<u8>) -> Result<Code, LzwError> {
        if self.by_pattern.contains_key(owned.as_slice()) {
            return Err(LzwError::InvalidPattern);
        }
        if self.len() >= DICT_CAPACITY {
            return Err(LzwError::CapacityExceeded);
        }

        let (&last, prefix) = owned.split_last().ok_or(LzwError::InvalidPattern)?;
        let prefix_code = self.find_by_pattern(prefix);

        self.multi.try_reserve(1)?;
        self.by_pattern.try_reserve(1)?;
        self.extensions.try_reserve(1)?;

        let owned = owned.into_boxed_slice();
        let code = self.next_code;
        if let Some(prefix_code) = prefix_code {
            self.extensions.insert((prefix_code, last), code);
        }
        self.by_pattern.insert(owned.clone(), code);
        self.multi.push(owned);
        self.next_code += 1;
        Ok(code)
    }

    /// Returns the code whose pattern is exactly `bytes`, if any.
    pub fn find_by_pattern(&self, bytes: &[u8]) -> Option<Code> {
        match *bytes {
            [] => None,
            [byte] => self.literals[byte as usize].then_some(Code::from(byte)),
            _ => self.by_pattern.get(bytes).copied(),
        }
    }

    /// Returns the code of `find_by_code(prefix) ++ [byte]`, if any.
    ///
    /// Agrees with [`Dictionary::find_by_pattern`] for every entry whose
    /// prefix was present when it was inserted, which holds for every entry
    /// created through [`Dictionary::extend`].
    #[inline]
    pub fn find_extension(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.extensions.get(&(prefix, byte)).copied()
    }

    /// Returns the pattern stored under `code`, if any.
    pub fn find_by_code(&self, code: Code) -> Option<&[u8]> {
        if code < FIRST_DICT_CODE {
            let b = code as usize;
            return self.literals[b].then(|| &LITERAL_BYTES[b..=b]);
        }
        self.multi
            .get(usize::from(code - FIRST_DICT_CODE))
            .map(|p| &**p)
    }

    /// Total number of live entries, literals included.
    #[inline]
    pub fn len(&self) -> usize {
        self.literal_count + self.multi.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of single-byte literal entries.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Code the next multi-byte insertion will receive.
    #[inline]
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// How many more entries fit before [`LzwError::CapacityExceeded`].
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        DICT_CAPACITY - self.len()
    }

    /// Multi-byte entries as `(code, pattern)` in ascending code order.
    pub fn multi_byte_entries(&self) -> impl Iterator<Item = (Code, &[u8])> + '_ {
        (FIRST_DICT_CODE..).zip(self.multi.iter().map(|p| &**p))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
