//! Error types for roll request checking and resolution.

use crate::request::RollCategory;

/// The two classes of request rejection.
///
/// Type errors come from the untyped request boundary and are always
/// detected before any grammar rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// A field held a value of the wrong type.
    Type,
    /// The request does not fit the category grammar.
    Grammar,
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type => write!(f, "type error"),
            Self::Grammar => write!(f, "grammar violation"),
        }
    }
}

/// Errors that can occur while building, checking, or resolving a roll request.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    /// The raw request body was not a JSON object.
    #[error("request must be a JSON object")]
    ExpectedObject,

    /// A numeric field held something other than an integer.
    #[error("{0} must be an integer")]
    ExpectedInteger(&'static str),

    /// A label field held something other than a string.
    #[error("{0} must be a string or null")]
    ExpectedString(&'static str),

    /// The category string matched no known roll category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The roll-type string matched no known roll type.
    #[error("unknown roll type: {0}")]
    UnknownRollType(String),

    /// The labels or roll type do not fit the category grammar.
    #[error("invalid {category} roll: {requirement}; legal types: {legal}")]
    IllegalCombination {
        /// Category whose grammar was violated.
        category: RollCategory,
        /// Phrase naming the label shape the category requires.
        requirement: &'static str,
        /// Comma-separated legal roll types for the category.
        legal: String,
    },
}

impl RollError {
    /// Classify this error into one of the two rejection kinds.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::ExpectedObject | Self::ExpectedInteger(_) | Self::ExpectedString(_) => {
                RejectionKind::Type
            }
            Self::UnknownCategory(_)
            | Self::UnknownRollType(_)
            | Self::IllegalCombination { .. } => RejectionKind::Grammar,
        }
    }
}

/// Convenience result type for roll operations.
pub type RollResult<T> = Result<T, RollError>;
