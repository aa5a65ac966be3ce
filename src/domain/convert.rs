// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar text conversion.
//!
//! This module provides the [`FromScalar`] trait, the single conversion path
//! behind both the `is_*` convertibility predicates and the typed extractors
//! on [`Value`](crate::domain::Value). Sharing one pure function per target
//! type makes the predicate/extractor consistency invariant hold by
//! construction: `is_i32() == true` exactly when `parse::<i32>()` succeeds.

/// Conversion from a scalar's raw text to a target type.
///
/// Implementations must be pure: the same text always produces the same
/// result. The conversion applies only to scalar nodes; structural kinds and
/// missing values are rejected before the text is ever consulted.
///
/// # Examples
///
/// ```
/// use doctree::domain::convert::FromScalar;
///
/// assert_eq!(i32::from_scalar("26379"), Some(26379));
/// assert_eq!(i32::from_scalar("h1"), None);
/// assert_eq!(bool::from_scalar("Yes"), Some(true));
/// ```
pub trait FromScalar: Sized {
    /// Human-readable name of the target type, used in type mismatch diagnostics.
    const TYPE_NAME: &'static str;

    /// Attempts the conversion. `None` means the text is not losslessly
    /// representable as `Self`.
    fn from_scalar(text: &str) -> Option<Self>;
}

impl FromScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    fn from_scalar(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Some(true),
            "false" | "no" | "0" | "off" => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_from_scalar_via_parse {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_scalar(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

impl_from_scalar_via_parse! {
    i32 => "i32",
    i64 => "i64",
    u32 => "u32",
    u64 => "u64",
    f64 => "f64",
}

impl FromScalar for String {
    const TYPE_NAME: &'static str = "string";

    fn from_scalar(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_true_variants() {
        for text in ["true", "True", "TRUE", "yes", "YES", "1", "on", "On"] {
            assert_eq!(bool::from_scalar(text), Some(true), "failed for: {}", text);
        }
    }

    #[test]
    fn test_bool_false_variants() {
        for text in ["false", "False", "FALSE", "no", "NO", "0", "off", "Off"] {
            assert_eq!(bool::from_scalar(text), Some(false), "failed for: {}", text);
        }
    }

    #[test]
    fn test_bool_invalid() {
        assert_eq!(bool::from_scalar("maybe"), None);
        assert_eq!(bool::from_scalar(""), None);
        assert_eq!(bool::from_scalar("2"), None);
    }

    #[test]
    fn test_i32() {
        assert_eq!(i32::from_scalar("42"), Some(42));
        assert_eq!(i32::from_scalar("-42"), Some(-42));
        assert_eq!(i32::from_scalar("2147483647"), Some(i32::MAX));
        assert_eq!(i32::from_scalar("2147483648"), None);
        assert_eq!(i32::from_scalar("3.14"), None);
        assert_eq!(i32::from_scalar("h1"), None);
    }

    #[test]
    fn test_i64() {
        assert_eq!(
            i64::from_scalar("9223372036854775807"),
            Some(9223372036854775807)
        );
        assert_eq!(i64::from_scalar("9223372036854775808"), None);
    }

    #[test]
    fn test_u32() {
        assert_eq!(u32::from_scalar("4294967295"), Some(u32::MAX));
        assert_eq!(u32::from_scalar("-1"), None);
    }

    #[test]
    fn test_u64() {
        assert_eq!(
            u64::from_scalar("18446744073709551615"),
            Some(18446744073709551615)
        );
        assert_eq!(u64::from_scalar("-1"), None);
    }

    #[test]
    fn test_f64() {
        assert_eq!(f64::from_scalar("3.14"), Some(3.14));
        assert_eq!(f64::from_scalar("42"), Some(42.0));
        assert_eq!(f64::from_scalar("not_a_number"), None);
    }

    #[test]
    fn test_string_accepts_any_text() {
        assert_eq!(String::from_scalar("h1"), Some("h1".to_string()));
        assert_eq!(String::from_scalar(""), Some(String::new()));
    }

    #[test]
    fn test_numeric_text_round_trips() {
        let n = i32::from_scalar("26379").unwrap();
        assert_eq!(i32::from_scalar(&n.to_string()), Some(n));
    }
}
