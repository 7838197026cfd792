//! Black-box checks of the wire form of admin commands.

use grpadmin_commands::{
    AdminCommand, CommandError, CommandName, FireCommand, GroupCommand, HireCommand,
    ResignCommand, RoleAssignment,
};
use grpadmin_core::{Id, Payload};
use serde_json::json;

fn id(raw: &str) -> Id {
    raw.parse().unwrap()
}

#[test]
fn hire_end_to_end() {
    let admins = [id("admin1@example")];
    let cmd = HireCommand::new(&id("group1@example"), Some(&admins[..]), None);

    let wire = cmd.to_json_string().unwrap();
    assert_eq!(
        wire,
        r#"{"command":"hire","group":"group1@example","administrators":["admin1@example"]}"#
    );

    let received = AdminCommand::from_json_str(&wire).unwrap();
    let AdminCommand::Hire(hire) = &received else {
        panic!("expected a hire command, got {received:?}");
    };
    assert_eq!(hire.group().unwrap(), id("group1@example"));
    assert_eq!(hire.administrators().unwrap(), Some(admins.to_vec()));
    assert_eq!(hire.assistants().unwrap(), None);
}

#[test]
fn explicit_empty_list_survives_the_wire() {
    let cmd = FireCommand::new(&id("group1@example"), None, Some(&[] as &[Id]));
    let wire = cmd.to_json_string().unwrap();
    assert_eq!(
        wire,
        r#"{"command":"fire","group":"group1@example","assistants":[]}"#
    );

    let back = FireCommand::from_payload(Payload::from_json_str(&wire).unwrap());
    assert_eq!(back.assistants().unwrap(), Some(vec![]));
    assert_eq!(back.administrators().unwrap(), None);
}

#[test]
fn hire_and_fire_payloads_differ_only_in_command() {
    let group = id("group1@example");
    let admins = [id("a@x"), id("b@x")];
    let bots = [id("bot@x")];

    let hire = HireCommand::new(&group, Some(&admins[..]), Some(&bots[..])).into_payload();
    let fire = FireCommand::new(&group, Some(&admins[..]), Some(&bots[..])).into_payload();

    assert_eq!(hire.len(), fire.len());
    for key in hire.keys() {
        if key == "command" {
            continue;
        }
        assert_eq!(hire.get(key), fire.get(key), "field {key} differs");
    }
    assert_eq!(hire.get("command"), Some(&json!("hire")));
    assert_eq!(fire.get("command"), Some(&json!("fire")));
}

#[test]
fn resign_never_carries_role_lists() {
    let cmd = ResignCommand::new(&id("group1@example"));
    let payload = cmd.into_payload();

    assert!(!payload.contains_key("administrators"));
    assert!(!payload.contains_key("assistants"));
    assert_eq!(payload.keys().collect::<Vec<_>>(), vec!["command", "group"]);
}

#[test]
fn malformed_list_is_reported_not_coerced() {
    let wire = r#"{"command":"hire","group":"group1@example","administrators":"admin1@example","assistants":3}"#;
    let AdminCommand::Hire(hire) = AdminCommand::from_json_str(wire).unwrap() else {
        panic!("expected a hire command");
    };

    match hire.administrators() {
        Err(CommandError::MalformedField { field, found, .. }) => {
            assert_eq!(field, "administrators");
            assert_eq!(found, "string");
        }
        other => panic!("expected MalformedField, got {other:?}"),
    }
    assert!(matches!(
        hire.assistants(),
        Err(CommandError::MalformedField { found: "number", .. })
    ));
}

#[test]
fn received_command_keeps_unknown_fields() {
    let wire = r#"{"type":136,"sn":42,"command":"resign","group":"group1@example","time":1700000000}"#;
    let cmd = AdminCommand::from_json_str(wire).unwrap();

    assert_eq!(cmd.command_name(), CommandName::Resign);
    assert_eq!(cmd.payload().to_json_string().unwrap(), wire);
}
