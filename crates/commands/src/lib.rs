//! Group administration commands.
//!
//! `hire` and `fire` appoint or remove administrators and assistants of a
//! group; `resign` lets the sender give up its own role. Each command is a
//! typed view over a JSON [`Payload`](grpadmin_core::Payload).

pub mod admin;
pub mod command;
pub mod decode;
pub mod error;
pub mod field;
pub mod name;

pub use admin::{FireCommand, HireCommand, ResignCommand, RoleAssignment};
pub use command::{BaseGroupCommand, GroupCommand, command_name_of};
pub use decode::{ADMIN_COMMANDS, AdminCommand};
pub use error::{CommandError, CommandResult};
pub use field::IdListField;
pub use name::CommandName;
