//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::json::LeafKind;

/// The result type that uses [EncodeError] as the error type.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// The error type for encoding an options tree into JSON.
///
/// Every variant carries the path of the offending field inside the options
/// tree, for example `series[0].data[2]`. An encoding error aborts the whole
/// encoding call; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A coordinate holds a number of components that does not match
    /// the arity of its kind.
    ArityMismatch {
        /// The path of the offending field.
        path: String,
        /// The component count required by the coordinate kind.
        expected: usize,
        /// The component count the value actually holds.
        actual: usize,
    },

    /// A numeric value is NaN or infinite and has no JSON representation.
    NonFiniteNumber {
        /// The path of the offending field.
        path: String,
    },

    /// A leaf value reached a rule registered for a different leaf kind.
    ///
    /// This happens when a caller replaces the rule for one [LeafKind] with
    /// a function that does not handle the leaf variant it is given.
    UnsupportedVariant {
        /// The path of the offending field.
        path: String,
        /// A description of the value the rule could not handle.
        detail: String,
    },

    /// No encoding rule is registered for the given leaf kind.
    MissingRule {
        /// The path of the offending field.
        path: String,
        /// The leaf kind that has no rule.
        kind: LeafKind,
    },
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let encode_error = "encode error:";

        match self {
            EncodeError::ArityMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{encode_error} coordinate at \"{path}\" holds {actual} components, expected {expected}"
            ),
            EncodeError::NonFiniteNumber { path } => write!(
                f,
                "{encode_error} the number at \"{path}\" is not finite and cannot be written as JSON"
            ),
            EncodeError::UnsupportedVariant { path, detail } => write!(
                f,
                "{encode_error} the value at \"{path}\" is not supported by its encoding rule: {detail}"
            ),
            EncodeError::MissingRule { path, kind } => write!(
                f,
                "{encode_error} no encoding rule is registered for {kind:?} at \"{path}\""
            ),
        }
    }
}

impl Error for EncodeError {}

/// The error type for decoding inbound JSON event payloads.
///
/// Decoding covers only the small, known event shapes sent back by the
/// rendered chart; there is no general JSON to options-tree decoder.
#[derive(Debug)]
pub enum DecodeError {
    /// A [serde_json::Error] encountered while deserializing an event payload.
    Json(serde_json::Error),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Json(error) => write!(f, "decode error: malformed event JSON: {error}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Json(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Json(error)
    }
}
