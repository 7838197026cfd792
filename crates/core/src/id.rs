//! Identifiers of network participants and groups.
//!
//! The canonical string form is `name@address/terminal`; only `address` is
//! required:
//!
//! - `moky`
//! - `group1@example`
//! - `moky@4DnqXWdTV8wuZgfqSCX9GjE2kNq7HJrUgQ/phone`

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IdError, IdResult};

/// A parsed identifier.
///
/// `Display` produces the canonical string and `FromStr` parses it, so
/// `id.to_string().parse::<Id>()` always yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id {
    name: Option<String>,
    address: String,
    terminal: Option<String>,
}

impl Id {
    /// Parse a canonical identifier string.
    pub fn parse(input: &str) -> IdResult<Self> {
        if input.is_empty() {
            return Err(IdError::Empty);
        }
        if let Some(ch) = input.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(IdError::IllegalCharacter {
                input: input.to_string(),
                ch,
            });
        }

        let (head, terminal) = match input.split_once('/') {
            Some((_, t)) if t.contains('/') => {
                return Err(IdError::MultipleSlash(input.to_string()));
            }
            Some((_, "")) => return Err(IdError::EmptyTerminal(input.to_string())),
            Some((h, t)) => (h, Some(t.to_string())),
            None => (input, None),
        };

        let (name, address) = match head.split_once('@') {
            Some((_, a)) if a.contains('@') => {
                return Err(IdError::MultipleAt(input.to_string()));
            }
            Some(("", _)) => return Err(IdError::EmptyName(input.to_string())),
            Some((n, a)) => (Some(n.to_string()), a),
            None => (None, head),
        };

        if address.is_empty() {
            return Err(IdError::EmptyAddress(input.to_string()));
        }

        Ok(Self {
            name,
            address: address.to_string(),
            terminal,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    /// Parse every string of a list, preserving order. Stops at the first
    /// invalid entry.
    pub fn convert<S: AsRef<str>>(items: &[S]) -> IdResult<Vec<Id>> {
        items.iter().map(|s| Id::parse(s.as_ref())).collect()
    }

    /// Format every identifier of a list, preserving order.
    pub fn revert(ids: &[Id]) -> Vec<String> {
        ids.iter().map(Id::to_string).collect()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}@")?;
        }
        f.write_str(&self.address)?;
        if let Some(terminal) = &self.terminal {
            write!(f, "/{terminal}")?;
        }
        Ok(())
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

impl TryFrom<&str> for Id {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Id::parse(value)
    }
}

impl TryFrom<String> for Id {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::parse(&value)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Id::parse(&raw).map_err(serde::de::Error::custom)
    }
}
