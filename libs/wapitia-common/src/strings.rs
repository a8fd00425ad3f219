//! String helper functions.
//!
//! Sizes count characters, not bytes, so multi-byte text is never split
//! inside a code point.

/// String of length 0.
pub const EMPTY: &str = "";

/// `s`, or the empty string when `s` is absent.
#[must_use]
pub fn safe(s: Option<&str>) -> &str {
    s.unwrap_or(EMPTY)
}

/// The leftmost `size` characters of `s`. Shorter strings and `None` pass
/// through unchanged.
#[must_use]
pub fn leftmost(size: usize, s: Option<&str>) -> Option<&str> {
    let s = s?;
    match s.char_indices().nth(size) {
        Some((cut, _)) => Some(&s[..cut]),
        None => Some(s),
    }
}

/// The rightmost `size` characters of `s`. Shorter strings and `None` pass
/// through unchanged.
#[must_use]
pub fn rightmost(size: usize, s: Option<&str>) -> Option<&str> {
    let s = s?;
    if size == 0 {
        return Some(EMPTY);
    }
    match s.char_indices().rev().nth(size - 1) {
        Some((cut, _)) => Some(&s[cut..]),
        None => Some(s),
    }
}
