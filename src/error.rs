//! Typed error contract shared by every module in the crate.
//!
//! Errors carry a machine-readable code, a human-readable message, optional
//! structured details, and optional remediation hints. The whole envelope
//! serializes to JSON so callers can surface failures without re-parsing
//! message strings.

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Declares the closed error catalog: one `ErrorCode` variant per dotted
/// code, plus a message-only constructor for codes that take no structured
/// details. Constructors with structured details are written out by hand
/// below, over the same catalog.
macro_rules! error_catalog {
    ( $( $(#[$meta:meta])* $variant:ident => $code:literal $(, $ctor:ident)? ; )* ) => {
        /// Machine-readable error codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $( $(#[$meta])* $variant, )*
        }

        impl ErrorCode {
            /// Dotted string form used in serialized envelopes.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => $code, )*
                }
            }
        }

        impl Error {
            $( $(
                pub fn $ctor(message: impl Into<String>) -> Self {
                    Self::new(ErrorCode::$variant, message)
                }
            )? )*
        }
    };
}

error_catalog! {
    /// An argument value failed a validation rule.
    ValidationInvalidArgument => "validation.invalid_argument";
    /// A required argument was not provided.
    ValidationMissingArgument => "validation.missing_argument";
    /// An argument value fell outside its permitted range.
    ValidationOutOfRange => "validation.out_of_range";
    /// An invariant the library relies on did not hold.
    InternalUnexpected => "internal.unexpected", internal_unexpected;
    /// Uncategorized failure.
    Other => "error", other;
}

impl Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable remediation hint attached to an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hint(pub String);

impl Hint {
    pub fn new(message: impl Into<String>) -> Self {
        Hint(message.into())
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(Hint::new(hint));
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    /// An argument value failed a validation rule.
    ///
    /// `value` is the offending value when it is printable; `hints` suggest
    /// how to fix the call.
    pub fn validation_invalid_argument(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
        hints: Option<Vec<String>>,
    ) -> Self {
        let field: String = field.into();
        let mut details = json!({ "field": field });
        if let Some(value) = value {
            details["value"] = Value::String(value);
        }
        Self {
            code: ErrorCode::ValidationInvalidArgument,
            message: message.into(),
            details,
            hints: hints
                .unwrap_or_default()
                .into_iter()
                .map(Hint)
                .collect(),
            retryable: None,
        }
    }

    /// A required argument was not provided.
    pub fn validation_missing_argument(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let field: String = field.into();
        Self::new(ErrorCode::ValidationMissingArgument, message)
            .with_details(json!({ "field": field }))
    }

    /// An argument value fell outside its permitted range. Bounds that do
    /// not apply (open-ended checks) are passed as `None`.
    pub fn validation_out_of_range(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
        min: Option<String>,
        max: Option<String>,
    ) -> Self {
        let field: String = field.into();
        let value: String = value.into();
        let mut details = json!({
            "field": field,
            "value": value,
        });
        if let Some(min) = min {
            details["min"] = Value::String(min);
        }
        if let Some(max) = max {
            details["max"] = Value::String(max);
        }
        Self::new(ErrorCode::ValidationOutOfRange, message).with_details(details)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}
