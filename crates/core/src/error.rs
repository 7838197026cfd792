//! Identifier codec error model.

use thiserror::Error;

/// Result type used by the identifier codec.
pub type IdResult<T> = Result<T, IdError>;

/// Reasons a string is rejected as an identifier.
///
/// The codec owns identifier syntax, so callers get these back verbatim
/// instead of a re-wrapped message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,

    /// Whitespace and control characters are never part of an identifier.
    #[error("identifier {input:?} contains illegal character {ch:?}")]
    IllegalCharacter { input: String, ch: char },

    #[error("identifier {0:?} has more than one '@'")]
    MultipleAt(String),

    #[error("identifier {0:?} has more than one '/'")]
    MultipleSlash(String),

    #[error("identifier {0:?} has an empty name")]
    EmptyName(String),

    #[error("identifier {0:?} has an empty address")]
    EmptyAddress(String),

    #[error("identifier {0:?} has an empty terminal")]
    EmptyTerminal(String),
}
