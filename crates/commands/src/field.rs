//! Identifier list fields.
//!
//! A list field maps one payload key to `Option<Vec<Id>>`:
//!
//! - key absent: `None` (not an empty list);
//! - key holding an array of strings: each string is parsed, order preserved;
//! - anything else: [`CommandError::MalformedField`].
//!
//! Writing `None` removes the key; writing a list (even an empty one) stores
//! the formatted strings. "Not specified" and "explicitly cleared" therefore
//! survive the wire unchanged.

use grpadmin_core::{Id, Payload, value_kind};
use serde_json::Value;

use crate::error::{CommandError, CommandResult};

/// A named identifier list inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdListField {
    key: &'static str,
}

impl IdListField {
    pub const ADMINISTRATORS: IdListField = IdListField::new("administrators");
    pub const ASSISTANTS: IdListField = IdListField::new("assistants");

    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Decode the field. Fails rather than returning a partial list.
    pub fn get(&self, payload: &Payload) -> CommandResult<Option<Vec<Id>>> {
        let Some(raw) = payload.get(self.key) else {
            return Ok(None);
        };
        let Value::Array(items) = raw else {
            return Err(CommandError::malformed(
                self.key,
                "array of identifier strings",
                value_kind(raw),
            ));
        };

        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(s) = item else {
                return Err(CommandError::malformed(
                    format!("{}[{}]", self.key, ids.len()),
                    "identifier string",
                    value_kind(item),
                ));
            };
            ids.push(Id::parse(s)?);
        }
        Ok(Some(ids))
    }

    /// Encode the field, replacing whatever was stored before.
    pub fn set(&self, payload: &mut Payload, ids: Option<&[Id]>) {
        match ids {
            Some(ids) => {
                tracing::trace!(field = self.key, count = ids.len(), "setting id list");
                payload.insert(self.key, Id::revert(ids));
            }
            None => {
                if payload.remove(self.key).is_some() {
                    tracing::trace!(field = self.key, "removed id list");
                }
            }
        }
    }
}
