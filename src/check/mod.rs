//! Input validation primitives.
//!
//! Provides ergonomic helpers for common validation patterns:
//! - Unwrapping Option values with descriptive errors
//! - Validating non-empty strings and collections
//! - Range checks and clamping
//! - A fluent, name-carrying argument wrapper for chained checks
//!
//! The fluent form replaces verbose ok_or_else + Error::validation_invalid_argument
//! chains:
//! ```ignore
//! let count = arg("count", count).at_least(1)?.at_most(64)?.into_value();
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;

/// Require an Option to contain a value.
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_missing_argument(field, message))
}

/// Require an Option to contain a value, with hints for resolution.
pub fn require_with_hints<T>(
    opt: Option<T>,
    field: &str,
    message: &str,
    hints: Vec<String>,
) -> Result<T> {
    opt.ok_or_else(|| {
        let mut err = Error::validation_missing_argument(field, message);
        for hint in hints {
            err = err.with_hint(hint);
        }
        err
    })
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Require a slice to be non-empty.
pub fn require_non_empty_slice<'a, T>(slice: &'a [T], field: &str, message: &str) -> Result<&'a [T]> {
    if slice.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(slice)
    }
}

/// Clamp a value into `[min, max]`.
///
/// Rejects calls where `min > max` rather than silently picking a bound.
pub fn clamp<T: PartialOrd + fmt::Display>(value: T, min: T, max: T) -> Result<T> {
    if min > max {
        return Err(Error::validation_invalid_argument(
            "min",
            format!("min ({}) must not be greater than max ({})", min, max),
            Some(min.to_string()),
            None,
        ));
    }
    Ok(if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    })
}

/// A named argument mid-validation.
///
/// Exists only for the duration of one fluent chain; each predicate either
/// returns the wrapper for further checks or an error naming the argument.
#[derive(Debug, Clone, Copy)]
pub struct Checked<'n, T> {
    name: &'n str,
    value: T,
}

/// Start a fluent validation chain for a named argument.
pub fn arg<'n, T>(name: &'n str, value: T) -> Checked<'n, T> {
    Checked { name, value }
}

impl<'n, T> Checked<'n, T> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the validated value, ending the chain.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Check an arbitrary predicate against the value.
    pub fn ensure(self, predicate: impl FnOnce(&T) -> bool, message: impl Into<String>) -> Result<Self> {
        if predicate(&self.value) {
            Ok(self)
        } else {
            Err(Error::validation_invalid_argument(
                self.name, message, None, None,
            ))
        }
    }
}

impl<'n, T: PartialOrd + fmt::Display> Checked<'n, T> {
    pub fn at_least(self, min: T) -> Result<Self> {
        if self.value < min {
            return Err(Error::validation_out_of_range(
                self.name,
                format!("{} must be at least {}", self.name, min),
                self.value.to_string(),
                Some(min.to_string()),
                None,
            ));
        }
        Ok(self)
    }

    pub fn at_most(self, max: T) -> Result<Self> {
        if self.value > max {
            return Err(Error::validation_out_of_range(
                self.name,
                format!("{} must be at most {}", self.name, max),
                self.value.to_string(),
                None,
                Some(max.to_string()),
            ));
        }
        Ok(self)
    }

    /// Check `min <= value <= max`. Rejects calls where `min > max`.
    pub fn in_range(self, min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(Error::validation_invalid_argument(
                "min",
                format!("min ({}) must not be greater than max ({})", min, max),
                Some(min.to_string()),
                None,
            ));
        }
        if self.value < min || self.value > max {
            return Err(Error::validation_out_of_range(
                self.name,
                format!("{} must be between {} and {}", self.name, min, max),
                self.value.to_string(),
                Some(min.to_string()),
                Some(max.to_string()),
            ));
        }
        Ok(self)
    }
}

impl<'n, 's> Checked<'n, &'s str> {
    pub fn non_empty(self) -> Result<Self> {
        if self.value.is_empty() {
            return Err(Error::validation_invalid_argument(
                self.name,
                format!("{} cannot be empty", self.name),
                None,
                None,
            ));
        }
        Ok(self)
    }

    /// Trim the value, then require the result to be non-empty. The chain
    /// continues with the trimmed string.
    pub fn trimmed_non_empty(self) -> Result<Checked<'n, &'s str>> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Err(Error::validation_invalid_argument(
                self.name,
                format!("{} cannot be empty", self.name),
                None,
                None,
            ));
        }
        Ok(Checked {
            name: self.name,
            value: trimmed,
        })
    }

    pub fn max_chars(self, max: usize) -> Result<Self> {
        let count = self.value.chars().count();
        if count > max {
            return Err(Error::validation_out_of_range(
                self.name,
                format!("{} must be at most {} characters", self.name, max),
                self.value.to_string(),
                None,
                Some(max.to_string()),
            ));
        }
        Ok(self)
    }

    /// Require the whole value to match a pattern. `expected` describes the
    /// accepted form for the error message.
    pub fn matches(self, pattern: &Regex, expected: &str) -> Result<Self> {
        if !pattern.is_match(self.value) {
            return Err(Error::validation_invalid_argument(
                self.name,
                format!("{} must be {}", self.name, expected),
                Some(self.value.to_string()),
                None,
            ));
        }
        Ok(self)
    }

    /// Require the value to be one of a closed set of accepted values.
    pub fn one_of(self, allowed: &[&str]) -> Result<Self> {
        if !allowed.contains(&self.value) {
            return Err(Error::validation_invalid_argument(
                self.name,
                format!("{} must be one of: {}", self.name, allowed.join(", ")),
                Some(self.value.to_string()),
                Some(allowed.iter().map(|v| v.to_string()).collect()),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn require_returns_value_when_some() {
        let result = require(Some("value"), "field", "msg");
        assert_eq!(result.unwrap(), "value");
    }

    #[test]
    fn require_returns_error_when_none() {
        let result: Result<&str> = require(None, "field", "Missing field");
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
        assert_eq!(err.details["field"], "field");
    }

    #[test]
    fn require_with_hints_attaches_hints() {
        let result: Result<&str> =
            require_with_hints(None, "field", "Missing", vec!["Set it".to_string()]);
        let err = result.unwrap_err();
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn require_non_empty_trims_whitespace() {
        let result = require_non_empty("  hello  ", "field", "msg");
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn require_non_empty_fails_for_whitespace_only() {
        assert!(require_non_empty("   ", "field", "Cannot be empty").is_err());
    }

    #[test]
    fn require_non_empty_slice_passes_for_non_empty() {
        let values = [1, 2, 3];
        let result = require_non_empty_slice(&values, "field", "msg");
        assert_eq!(result.unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn clamp_bounds_value() {
        assert_eq!(clamp(5, 0, 10).unwrap(), 5);
        assert_eq!(clamp(-5, 0, 10).unwrap(), 0);
        assert_eq!(clamp(15, 0, 10).unwrap(), 10);
    }

    #[test]
    fn clamp_rejects_inverted_bounds() {
        let err = clamp(5, 10, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["field"], "min");
    }

    #[test]
    fn fluent_chain_passes_valid_value() {
        let count = arg("count", 5).at_least(1).unwrap().at_most(10).unwrap().into_value();
        assert_eq!(count, 5);
    }

    #[test]
    fn fluent_chain_names_failing_argument() {
        let err = arg("count", 0).at_least(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationOutOfRange);
        assert_eq!(err.details["field"], "count");
        assert_eq!(err.details["min"], "1");
    }

    #[test]
    fn in_range_rejects_inverted_bounds() {
        let err = arg("count", 5).in_range(10, 0).unwrap_err();
        assert_eq!(err.details["field"], "min");
    }

    #[test]
    fn trimmed_non_empty_continues_with_trimmed_value() {
        let value = arg("name", "  alpha  ")
            .trimmed_non_empty()
            .unwrap()
            .max_chars(16)
            .unwrap()
            .into_value();
        assert_eq!(value, "alpha");
    }

    #[test]
    fn matches_rejects_non_matching_value() {
        let pattern = Regex::new(r"^[a-z]+$").unwrap();
        let err = arg("slug", "Not A Slug").matches(&pattern, "lowercase letters").unwrap_err();
        assert_eq!(err.details["value"], "Not A Slug");
    }

    #[test]
    fn one_of_accepts_member_and_rejects_others() {
        assert!(arg("mode", "fast").one_of(&["fast", "slow"]).is_ok());
        let err = arg("mode", "turbo").one_of(&["fast", "slow"]).unwrap_err();
        assert_eq!(err.hints.len(), 2);
    }
}
