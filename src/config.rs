// config.rs — Compile-time configuration constants.
//
// The code space follows the usual 12-bit LZW convention: at most 4096 live
// dictionary entries per call, with learned patterns numbered from 256.
// Codes are carried as full `u16` values; nothing here implies bit-packing.

// Maximum number of live dictionary entries (literals + learned patterns).
// An insertion past this bound fails with `LzwError::CapacityExceeded`.
pub const DICT_CAPACITY: usize = 4096;

// First code handed out to a multi-byte pattern.
pub const FIRST_DICT_CODE: u16 = 256;

// Largest code that denotes a literal byte.
pub const LITERAL_CODE_MAX: u16 = 255;

// Default CLI display level (2 = normal output, warnings on stderr).
// Can be overridden by the LZW_DISPLAY_LEVEL environment variable,
// or by the -v / -q command-line flags.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
