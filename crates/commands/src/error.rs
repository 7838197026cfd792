//! Command decoding error model.

use grpadmin_core::IdError;
use thiserror::Error;

use crate::name::CommandName;

/// Result type used across the command layer.
pub type CommandResult<T> = Result<T, CommandError>;

/// Failure reading a command out of its payload.
///
/// Wrapping a payload never fails; these surface on the first read of the
/// offending field and are returned to that caller untouched.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A field is present but holds the wrong kind of value.
    #[error("malformed field {field:?}: expected {expected}, found {found}")]
    MalformedField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A stored string is not a valid identifier.
    #[error(transparent)]
    InvalidIdentifier(#[from] IdError),

    /// A field every group command carries is absent.
    #[error("missing field {0:?}")]
    MissingField(&'static str),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    /// A recognized group command that the decoder does not handle.
    #[error("unexpected command {found}, expected one of {expected:?}")]
    UnexpectedCommand {
        expected: &'static [CommandName],
        found: CommandName,
    },

    #[error("invalid payload json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    pub fn malformed(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            expected,
            found,
        }
    }
}
