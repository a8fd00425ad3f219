//! Helpers for nullable flags, such as the `active` audit column.

/// `true` only for `Some(true)`.
#[must_use]
pub fn is_true(b: Option<bool>) -> bool {
    b == Some(true)
}

/// `true` for `None` and `Some(false)`.
#[must_use]
pub fn is_null_or_false(b: Option<bool>) -> bool {
    !is_true(b)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn nullable_flags() {
        assert!(is_true(Some(true)));
        assert!(!is_true(Some(false)));
        assert!(!is_true(None));

        assert!(is_null_or_false(None));
        assert!(is_null_or_false(Some(false)));
        assert!(!is_null_or_false(Some(true)));
    }
}
