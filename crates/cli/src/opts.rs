use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use grpadmin_core::Id;

const DESCRIPTION: &str = r#"
Group administration commands

Builds hire/fire/resign command payloads and inspects received ones.
Logs go to stderr; set RUST_LOG to change verbosity.
"#;

#[derive(Parser, Debug)]
#[command(name = "grpadmin", version, about = DESCRIPTION)]
pub struct Opts {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        env = "GRPADMIN_LOG_FORMAT",
        default_value_t = LogFormatArg::Json
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Build a command appointing administrators and/or assistants.
    Hire(RoleArgs),
    /// Build a command removing administrators and/or assistants.
    Fire(RoleArgs),
    /// Build a command resigning from a group's administration.
    Resign(ResignArgs),
    /// Decode a received command and print its fields.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
pub struct RoleArgs {
    /// Target group identifier, e.g. group1@example.
    #[arg(short, long)]
    pub group: Id,

    /// Administrator identifier; repeat for several.
    #[arg(short, long = "admin")]
    pub admins: Vec<Id>,

    /// Assistant identifier; repeat for several.
    #[arg(short = 's', long = "assistant")]
    pub assistants: Vec<Id>,

    /// Write an explicit empty administrators list instead of omitting it.
    #[arg(long, conflicts_with = "admins")]
    pub no_admins: bool,

    /// Write an explicit empty assistants list instead of omitting it.
    #[arg(long, conflicts_with = "assistants")]
    pub no_assistants: bool,
}

impl RoleArgs {
    pub fn administrators(&self) -> Option<&[Id]> {
        list_arg(&self.admins, self.no_admins)
    }

    pub fn assistants(&self) -> Option<&[Id]> {
        list_arg(&self.assistants, self.no_assistants)
    }
}

/// Absent unless given at least once or explicitly emptied.
fn list_arg(ids: &[Id], explicit_empty: bool) -> Option<&[Id]> {
    if ids.is_empty() && !explicit_empty {
        None
    } else {
        Some(ids)
    }
}

#[derive(Args, Debug)]
pub struct ResignArgs {
    /// Target group identifier.
    #[arg(short, long)]
    pub group: Id,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding the JSON payload; reads stdin when omitted.
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for grpadmin_observability::LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => grpadmin_observability::LogFormat::Json,
            LogFormatArg::Text => grpadmin_observability::LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_lists_are_absent() {
        let opts = Opts::try_parse_from(["grpadmin", "hire", "-g", "group1@example", "-a", "admin1@example"])
            .unwrap();
        let SubCommand::Hire(args) = opts.subcmd else {
            panic!("expected hire");
        };
        assert_eq!(args.group, "group1@example".parse::<Id>().unwrap());
        assert_eq!(args.administrators().map(<[Id]>::len), Some(1));
        assert_eq!(args.assistants(), None);
    }

    #[test]
    fn no_flags_force_empty_lists() {
        let opts = Opts::try_parse_from(["grpadmin", "fire", "-g", "g@x", "--no-assistants"]).unwrap();
        let SubCommand::Fire(args) = opts.subcmd else {
            panic!("expected fire");
        };
        assert_eq!(args.administrators(), None);
        assert_eq!(args.assistants(), Some(&[] as &[Id]));
    }

    #[test]
    fn invalid_identifiers_are_rejected_by_the_parser() {
        assert!(Opts::try_parse_from(["grpadmin", "resign", "-g", "@nowhere"]).is_err());
        assert!(
            Opts::try_parse_from(["grpadmin", "hire", "-g", "g@x", "-a", "a@x", "--no-admins"]).is_err()
        );
    }

    #[test]
    fn logs_default_to_json() {
        let opts = Opts::try_parse_from(["grpadmin", "resign", "-g", "g@x"]).unwrap();
        assert_eq!(opts.log_format, LogFormatArg::Json);
        assert_eq!(
            grpadmin_observability::LogFormat::from(opts.log_format),
            grpadmin_observability::LogFormat::default()
        );

        let opts = Opts::try_parse_from(["grpadmin", "--log-format", "text", "resign", "-g", "g@x"])
            .unwrap();
        assert_eq!(opts.log_format, LogFormatArg::Text);
    }

    #[test]
    fn definition_is_consistent() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
