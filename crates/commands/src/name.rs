use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Names of the group commands known to the protocol.
///
/// Serialized as the lowercase string carried in the payload's `command` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandName {
    Found,
    Abdicate,
    Invite,
    Expel,
    Join,
    Quit,
    Query,
    Reset,
    Hire,
    Fire,
    Resign,
}

impl CommandName {
    pub const ALL: [CommandName; 11] = [
        CommandName::Found,
        CommandName::Abdicate,
        CommandName::Invite,
        CommandName::Expel,
        CommandName::Join,
        CommandName::Quit,
        CommandName::Query,
        CommandName::Reset,
        CommandName::Hire,
        CommandName::Fire,
        CommandName::Resign,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Found => "found",
            CommandName::Abdicate => "abdicate",
            CommandName::Invite => "invite",
            CommandName::Expel => "expel",
            CommandName::Join => "join",
            CommandName::Quit => "quit",
            CommandName::Query => "query",
            CommandName::Reset => "reset",
            CommandName::Hire => "hire",
            CommandName::Fire => "fire",
            CommandName::Resign => "resign",
        }
    }

    /// Whether this command changes the administrator/assistant roster.
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            CommandName::Hire | CommandName::Fire | CommandName::Resign
        )
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_name() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>().unwrap(), name);
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        assert!(matches!(
            "promote".parse::<CommandName>(),
            Err(CommandError::UnknownCommand(n)) if n == "promote"
        ));
        assert!("Hire".parse::<CommandName>().is_err());
    }

    #[test]
    fn serde_matches_as_str() {
        for name in CommandName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn only_hire_fire_resign_are_admin_commands() {
        let admin: Vec<_> = CommandName::ALL.into_iter().filter(|n| n.is_admin()).collect();
        assert_eq!(
            admin,
            vec![CommandName::Hire, CommandName::Fire, CommandName::Resign]
        );
    }
}
