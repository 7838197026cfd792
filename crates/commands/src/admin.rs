//! Administrator commands: hire, fire and resign.
//!
//! Hire and fire carry the same two identifier lists and differ only in their
//! `command` name, so both get their accessors from [`RoleAssignment`].
//! Resign carries nothing beyond the group and deliberately does not
//! implement it.

use grpadmin_core::{Id, Payload};

use crate::command::{GroupCommand, base_payload, group_command};
use crate::error::CommandResult;
use crate::field::IdListField;
use crate::name::CommandName;

/// Group commands that carry `administrators` and `assistants` lists.
///
/// Both lists are independently optional. No overlap or ordering rule is
/// enforced between them.
pub trait RoleAssignment: GroupCommand {
    fn administrators(&self) -> CommandResult<Option<Vec<Id>>> {
        IdListField::ADMINISTRATORS.get(self.payload())
    }

    fn set_administrators(&mut self, users: Option<&[Id]>) {
        IdListField::ADMINISTRATORS.set(self.payload_mut(), users);
    }

    fn assistants(&self) -> CommandResult<Option<Vec<Id>>> {
        IdListField::ASSISTANTS.get(self.payload())
    }

    fn set_assistants(&mut self, bots: Option<&[Id]>) {
        IdListField::ASSISTANTS.set(self.payload_mut(), bots);
    }
}

fn role_payload(
    name: CommandName,
    group: &Id,
    administrators: Option<&[Id]>,
    assistants: Option<&[Id]>,
) -> Payload {
    tracing::debug!(command = %name, %group, "building role assignment command");
    let mut payload = base_payload(name, group);
    IdListField::ADMINISTRATORS.set(&mut payload, administrators);
    IdListField::ASSISTANTS.set(&mut payload, assistants);
    payload
}

group_command!(
    /// Appoint administrators and/or assistants of a group.
    HireCommand
);

impl HireCommand {
    pub fn new(group: &Id, administrators: Option<&[Id]>, assistants: Option<&[Id]>) -> Self {
        Self::from_payload(role_payload(CommandName::Hire, group, administrators, assistants))
    }
}

impl RoleAssignment for HireCommand {}

group_command!(
    /// Remove administrators and/or assistants of a group.
    FireCommand
);

impl FireCommand {
    pub fn new(group: &Id, administrators: Option<&[Id]>, assistants: Option<&[Id]>) -> Self {
        Self::from_payload(role_payload(CommandName::Fire, group, administrators, assistants))
    }
}

impl RoleAssignment for FireCommand {}

group_command!(
    /// The sender gives up its administrative role in a group.
    ///
    /// The resigning member is the sender of the enclosing message, so the
    /// command itself only names the group.
    ResignCommand
);

impl ResignCommand {
    pub fn new(group: &Id) -> Self {
        tracing::debug!(command = %CommandName::Resign, %group, "building resign command");
        Self::from_payload(base_payload(CommandName::Resign, group))
    }
}
