//! # Optional Rendering Module
//!
//! Display support for optional values, rendering the absent state as the
//! canonical string `null`.
//!
//! Rust's `Option` already is the two-state sum type this crate teaches
//! with, and its combinators supply the operators themselves:
//!
//! - safe conditional access is `opt.map(...)` (the closure is never
//!   invoked when the value is absent),
//! - the default-fallback operator `a ?? fallback` is `opt.unwrap_or(fallback)`.
//!
//! What `Option` does not supply is a `Display` impl, so format strings
//! cannot embed one directly. [`OrNull`] fills that gap.
//!
//! ## Example
//!
//! ```rust
//! use nullsafe::optional::NullDisplay;
//!
//! let name: Option<String> = None;
//! assert_eq!(format!("name: {}", name.or_null()), "name: null");
//! ```

use std::fmt;

/// Canonical textual rendering of an absent value.
pub const NULL_TEXT: &str = "null";

/// Display adapter over an optional value.
///
/// Prints the contained value when present and [`NULL_TEXT`] when absent.
pub struct OrNull<'a, T>(pub Option<&'a T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL_TEXT),
        }
    }
}

/// Extension trait adding null-rendering to `Option` values.
pub trait NullDisplay<T> {
    /// Borrows this optional as a [`OrNull`] display adapter.
    fn or_null(&self) -> OrNull<'_, T>;
}

impl<T: fmt::Display> NullDisplay<T> for Option<T> {
    fn or_null(&self) -> OrNull<'_, T> {
        OrNull(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_renders_as_null() {
        let name: Option<String> = None;
        assert_eq!(name.or_null().to_string(), "null");
    }

    #[test]
    fn test_present_renders_inner_value() {
        let name = Some("Alice".to_string());
        assert_eq!(name.or_null().to_string(), "Alice");
        assert_eq!(format!("hello {}", name.or_null()), "hello Alice");
    }

    #[test]
    fn test_safe_access_short_circuits_on_absent() {
        let absent: Option<String> = None;
        // The transformation must not run at all for an absent value.
        let result = absent.map(|_| panic!("transformation invoked on absent value"));
        assert_eq!(result, None::<String>);
    }

    #[test]
    fn test_safe_access_applies_on_present() {
        let present = Some("str".to_string());
        assert_eq!(
            present.as_deref().map(str::to_uppercase),
            Some("STR".to_string())
        );
    }

    #[test]
    fn test_fallback_yields_literal_not_null_text() {
        let absent: Option<&str> = None;
        assert_eq!(absent.unwrap_or("default"), "default");
        assert_ne!(absent.unwrap_or("default"), NULL_TEXT);
    }

    #[test]
    fn test_fallback_keeps_present_value() {
        assert_eq!(Some("kept").unwrap_or("default"), "kept");
    }
}
