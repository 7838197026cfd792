//! Selecting the admin command variant for a received payload.

use grpadmin_core::{Id, Payload};
use serde::Serialize;

use crate::admin::{FireCommand, HireCommand, ResignCommand};
use crate::command::{GroupCommand, command_name_of};
use crate::error::{CommandError, CommandResult};
use crate::name::CommandName;

/// Commands this decoder accepts.
pub const ADMIN_COMMANDS: &[CommandName] =
    &[CommandName::Hire, CommandName::Fire, CommandName::Resign];

/// A received administrator command.
///
/// Only the `command` field is read to pick the variant; all other fields are
/// left for the variant to decode lazily.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdminCommand {
    Hire(HireCommand),
    Fire(FireCommand),
    Resign(ResignCommand),
}

impl AdminCommand {
    pub fn from_payload(payload: Payload) -> CommandResult<Self> {
        let name = command_name_of(&payload)?;
        let cmd = match name {
            CommandName::Hire => AdminCommand::Hire(HireCommand::from_payload(payload)),
            CommandName::Fire => AdminCommand::Fire(FireCommand::from_payload(payload)),
            CommandName::Resign => AdminCommand::Resign(ResignCommand::from_payload(payload)),
            CommandName::Found
            | CommandName::Abdicate
            | CommandName::Invite
            | CommandName::Expel
            | CommandName::Join
            | CommandName::Quit
            | CommandName::Query
            | CommandName::Reset => {
                return Err(CommandError::UnexpectedCommand {
                    expected: ADMIN_COMMANDS,
                    found: name,
                });
            }
        };
        tracing::debug!(command = %name, "decoded admin command");
        Ok(cmd)
    }

    /// Parse JSON text. The top-level value must be an object.
    pub fn from_json_str(raw: &str) -> CommandResult<Self> {
        Self::from_payload(Payload::from_json_str(raw)?)
    }

    /// The variant's command name. Never fails: the variant was chosen from it.
    pub fn command_name(&self) -> CommandName {
        match self {
            AdminCommand::Hire(_) => CommandName::Hire,
            AdminCommand::Fire(_) => CommandName::Fire,
            AdminCommand::Resign(_) => CommandName::Resign,
        }
    }

    pub fn group(&self) -> CommandResult<Id> {
        match self {
            AdminCommand::Hire(c) => c.group(),
            AdminCommand::Fire(c) => c.group(),
            AdminCommand::Resign(c) => c.group(),
        }
    }

    pub fn payload(&self) -> &Payload {
        match self {
            AdminCommand::Hire(c) => c.payload(),
            AdminCommand::Fire(c) => c.payload(),
            AdminCommand::Resign(c) => c.payload(),
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            AdminCommand::Hire(c) => c.into_payload(),
            AdminCommand::Fire(c) => c.into_payload(),
            AdminCommand::Resign(c) => c.into_payload(),
        }
    }
}

impl TryFrom<Payload> for AdminCommand {
    type Error = CommandError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        AdminCommand::from_payload(payload)
    }
}

impl From<HireCommand> for AdminCommand {
    fn from(value: HireCommand) -> Self {
        AdminCommand::Hire(value)
    }
}

impl From<FireCommand> for AdminCommand {
    fn from(value: FireCommand) -> Self {
        AdminCommand::Fire(value)
    }
}

impl From<ResignCommand> for AdminCommand {
    fn from(value: ResignCommand) -> Self {
        AdminCommand::Resign(value)
    }
}
