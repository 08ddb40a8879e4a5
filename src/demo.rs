//! # Null-Safety Demonstration
//!
//! The demonstration routine: four independent statements against an absent
//! optional string and a dynamically-typed value, each printing its result.
//! None of the four can fail on absence or on a type mismatch, which is the
//! point of the exercise.

use std::io::{self, Write};

use crate::optional::NullDisplay;
use crate::value::Value;

/// The fallback substituted when the optional string is absent.
pub const DEFAULT_MESSAGE: &str = "This is the default value";

/// Runs the four demonstration statements in order, writing one line each.
///
/// 1. Safe conditional access: upper-case the string only if present;
///    absent renders as `null` inside the template.
/// 2. Default fallback: the string if present, else [`DEFAULT_MESSAGE`].
/// 3. Checked conversion: a list of integers interpreted as text yields
///    absent rather than an error.
/// 4. Safe conditional access on the absent result of step 3.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let str_value: Option<String> = None;

    let upper = str_value.as_deref().map(str::to_uppercase);
    writeln!(out, "What happens when we do this: {}", upper.or_null())?;

    let with_default = str_value.as_deref().unwrap_or(DEFAULT_MESSAGE);
    writeln!(out, "{}", with_default)?;

    let something = Value::List(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
    ]);
    let as_text = something.into_text();
    writeln!(out, "{}", as_text.or_null())?;

    let upper_text = as_text.as_deref().map(str::to_uppercase);
    writeln!(out, "{}", upper_text.or_null())?;

    Ok(())
}

/// Runs the demonstration into a `String`, for callers that want the output
/// without touching stdout.
pub fn render() -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    run(&mut buf).expect("in-memory write failed");
    String::from_utf8(buf).expect("demo output is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_embeds_null() {
        let output = render();
        assert_eq!(
            output.lines().next(),
            Some("What happens when we do this: null")
        );
    }

    #[test]
    fn test_second_line_is_default_message() {
        let output = render();
        assert_eq!(output.lines().nth(1), Some(DEFAULT_MESSAGE));
    }

    #[test]
    fn test_mismatched_cast_lines_are_null() {
        let output = render();
        assert_eq!(output.lines().nth(2), Some("null"));
        assert_eq!(output.lines().nth(3), Some("null"));
    }
}
