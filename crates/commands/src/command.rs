use chrono::{DateTime, Utc};
use grpadmin_core::{Id, Payload, value_kind};
use serde_json::Value;

use crate::error::{CommandError, CommandResult};
use crate::name::CommandName;

pub const COMMAND: &str = "command";
pub const GROUP: &str = "group";
pub const TIME: &str = "time";

/// A command targeting a group (group command abstraction).
///
/// Every group command is a view over a [`Payload`] that it exclusively owns.
/// Implementors only hand out the payload; the shared fields are decoded by
/// the provided methods, lazily, on each read.
///
/// ## Fresh vs. received
///
/// Commands built with a constructor always carry `command` and `group`.
/// Commands wrapped around a received payload carry whatever arrived, so the
/// accessors return `Result` and report missing or malformed fields to the
/// caller instead of guessing.
///
/// ## Design Constraints
///
/// Commands must be:
/// - **Cloneable**: a command may be kept after it is serialized
/// - **Send + Sync**: commands are plain data and cross thread boundaries
/// - **'static**: commands own their payload
pub trait GroupCommand: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn payload(&self) -> &Payload;

    fn payload_mut(&mut self) -> &mut Payload;

    fn into_payload(self) -> Payload;

    fn command_name(&self) -> CommandResult<CommandName> {
        command_name_of(self.payload())
    }

    fn group(&self) -> CommandResult<Id> {
        Ok(Id::parse(read_str(self.payload(), GROUP)?)?)
    }

    fn set_group(&mut self, group: &Id) {
        self.payload_mut().insert(GROUP, group.to_string());
    }

    /// Time the command was issued, if the sender stamped one.
    ///
    /// Stored as seconds since the Unix epoch; fractions are kept to the
    /// millisecond.
    fn time(&self) -> CommandResult<Option<DateTime<Utc>>> {
        let Some(raw) = self.payload().get(TIME) else {
            return Ok(None);
        };
        let seconds = raw
            .as_f64()
            .ok_or_else(|| CommandError::malformed(TIME, "number", value_kind(raw)))?;
        let millis = (seconds * 1000.0).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(CommandError::malformed(TIME, "timestamp", "out of range number"));
        }
        DateTime::from_timestamp_millis(millis as i64)
            .map(Some)
            .ok_or_else(|| CommandError::malformed(TIME, "timestamp", "out of range number"))
    }

    fn set_time(&mut self, time: Option<DateTime<Utc>>) {
        match time {
            Some(t) => {
                self.payload_mut()
                    .insert(TIME, t.timestamp_millis() as f64 / 1000.0);
            }
            None => {
                self.payload_mut().remove(TIME);
            }
        }
    }

    fn to_json(&self) -> Value {
        Value::Object(self.payload().as_map().clone())
    }

    fn to_json_string(&self) -> CommandResult<String> {
        Ok(self.payload().to_json_string()?)
    }
}

/// Read the `command` field of any payload.
pub fn command_name_of(payload: &Payload) -> CommandResult<CommandName> {
    read_str(payload, COMMAND)?.parse()
}

fn read_str<'a>(payload: &'a Payload, key: &'static str) -> CommandResult<&'a str> {
    match payload.get(key) {
        None => Err(CommandError::MissingField(key)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CommandError::malformed(key, "string", value_kind(other))),
    }
}

/// Fresh payload carrying `command` then `group`.
pub(crate) fn base_payload(name: CommandName, group: &Id) -> Payload {
    let mut payload = Payload::new();
    payload.insert(COMMAND, name.as_str());
    payload.insert(GROUP, group.to_string());
    payload
}

/// Implements the boilerplate shared by every concrete group command:
/// payload ownership, wrapping, serde, and the [`GroupCommand`] impl.
macro_rules! group_command {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(grpadmin_core::Payload);

        impl $t {
            /// Wrap a received payload verbatim. Nothing is validated until a
            /// field is read.
            pub fn from_payload(payload: grpadmin_core::Payload) -> Self {
                Self(payload)
            }
        }

        impl $crate::command::GroupCommand for $t {
            fn payload(&self) -> &grpadmin_core::Payload {
                &self.0
            }

            fn payload_mut(&mut self) -> &mut grpadmin_core::Payload {
                &mut self.0
            }

            fn into_payload(self) -> grpadmin_core::Payload {
                self.0
            }
        }

        impl From<$t> for grpadmin_core::Payload {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use group_command;

group_command!(
    /// A group command with no fields beyond the shared ones.
    BaseGroupCommand
);

impl BaseGroupCommand {
    pub fn new(name: CommandName, group: &Id) -> Self {
        tracing::debug!(command = %name, %group, "building group command");
        Self(base_payload(name, group))
    }
}
