// arg_utils.rs — Small parsing helpers for the argument loop and for
// environment-variable overrides.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Parses an unsigned 32-bit integer from the start of `s`.
///
/// Returns `None` if `s` does not start with a decimal digit or the value
/// overflows `u32`, otherwise `Some((value, remainder))` where `remainder`
/// is the unconsumed tail of `s`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].parse::<u32>().ok()?;
    Some((value, &s[digits..]))
}
