use std::io::Read;

use anyhow::Context;
use clap::Parser;
use grpadmin_commands::{
    AdminCommand, FireCommand, GroupCommand, HireCommand, ResignCommand, RoleAssignment,
};
use grpadmin_core::{Id, Payload};

mod opts;

use opts::*;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    grpadmin_observability::tracing::init(opts.log_format.into());

    match opts.subcmd {
        SubCommand::Hire(args) => {
            let cmd = HireCommand::new(&args.group, args.administrators(), args.assistants());
            print_payload(cmd.payload(), opts.pretty)?;
        }
        SubCommand::Fire(args) => {
            let cmd = FireCommand::new(&args.group, args.administrators(), args.assistants());
            print_payload(cmd.payload(), opts.pretty)?;
        }
        SubCommand::Resign(args) => {
            let cmd = ResignCommand::new(&args.group);
            print_payload(cmd.payload(), opts.pretty)?;
        }
        SubCommand::Decode(args) => {
            let raw = match &args.file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let cmd = AdminCommand::from_json_str(&raw).context("not an admin command")?;
            tracing::info!(command = %cmd.command_name(), "decoded payload");
            print!("{}", describe(&cmd)?);
        }
    }

    Ok(())
}

fn print_payload(payload: &Payload, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        payload.to_json_string_pretty()?
    } else {
        payload.to_json_string()?
    };
    println!("{out}");
    Ok(())
}

/// Render every field of a decoded command, one per line.
///
/// All fields are decoded before anything is rendered, so a malformed field
/// yields an error and no partial description.
fn describe(cmd: &AdminCommand) -> anyhow::Result<String> {
    let group = cmd.group().context("bad group field")?;
    let lists = match cmd {
        AdminCommand::Hire(c) => Some(role_lists(c)?),
        AdminCommand::Fire(c) => Some(role_lists(c)?),
        AdminCommand::Resign(_) => None,
    };

    let mut out = format!("command: {}\ngroup: {group}\n", cmd.command_name());
    if let Some((administrators, assistants)) = lists {
        out.push_str(&format!("administrators: {}\n", format_list(administrators)));
        out.push_str(&format!("assistants: {}\n", format_list(assistants)));
    }
    Ok(out)
}

type RoleLists = (Option<Vec<Id>>, Option<Vec<Id>>);

fn role_lists<C: RoleAssignment>(cmd: &C) -> anyhow::Result<RoleLists> {
    let administrators = cmd.administrators().context("bad administrators field")?;
    let assistants = cmd.assistants().context("bad assistants field")?;
    Ok((administrators, assistants))
}

fn format_list(ids: Option<Vec<Id>>) -> String {
    match ids {
        None => "(absent)".to_string(),
        Some(ids) if ids.is_empty() => "(empty)".to_string(),
        Some(ids) => Id::revert(&ids).join(", "),
    }
}
