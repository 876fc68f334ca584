//! LZW dictionary compression over in-memory byte buffers.
//!
//! Each call to [`encode`] or [`decode`] builds its own [`Dictionary`] and
//! drops it on return, so independent calls never share state. The code
//! stream is a plain sequence of `u16` values with no header and no
//! bit-packing.

pub mod decode;
pub mod dictionary;
pub mod encode;
pub mod types;

pub use decode::{decode, decode_into};
pub use dictionary::Dictionary;
pub use encode::{encode, encode_bound, encode_into};
pub use types::{is_literal, Code, LzwError, DICT_CAPACITY, FIRST_DICT_CODE, LITERAL_CODE_MAX};
