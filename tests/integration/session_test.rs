//! Full sessions: mode transitions, validation and store mutations.

use pretty_assertions::assert_eq;
use routerlab::commands::Response;
use routerlab::device::InterfaceId;
use routerlab::session::{Mode, ModeKind};
use routerlab::Simulator;

fn simulator_in(lines: &[&str]) -> Simulator {
    let mut sim = Simulator::default();
    for line in lines {
        sim.execute(line);
    }
    sim
}

fn global_config() -> Simulator {
    simulator_in(&["enable", "configure terminal"])
}

#[test]
fn test_mode_chain_and_prompts() {
    let mut sim = Simulator::default();
    assert_eq!(sim.prompt(), "Router>");

    let steps = [
        ("enable", "Router#"),
        ("configure terminal", "Router(config)#"),
        ("interface gigabitethernet0/1", "Router(config-if-g0/1)#"),
        ("exit", "Router(config)#"),
        ("exit", "Router#"),
        ("exit", "Router>"),
        ("exit", "Router>"),
    ];
    for (line, prompt) in steps {
        let response = sim.execute(line);
        assert_eq!(response, Response::silent(prompt), "after {line:?}");
    }
}

#[test]
fn test_end_always_lands_in_privileged_exec() {
    let setups: [&[&str]; 4] = [
        &[],
        &["enable"],
        &["enable", "configure terminal"],
        &["enable", "configure terminal", "interface g0/2"],
    ];
    for setup in setups {
        let mut sim = simulator_in(setup);
        let response = sim.execute("end");
        assert!(response.is_silent());
        assert_eq!(sim.session().mode, Mode::PrivilegedExec, "from {setup:?}");
        assert_eq!(sim.session().active_interface(), None);
    }
}

#[test]
fn test_blank_input_is_a_no_op() {
    let mut sim = global_config();
    let before = sim.clone();
    for input in ["", "   ", "\t"] {
        assert_eq!(sim.execute(input), Response::silent("Router(config)#"));
    }
    assert_eq!(sim.session(), before.session());
}

#[test]
fn test_invalid_commands_never_mutate_state() {
    let cases: [(&[&str], &str, &str); 8] = [
        (&[], "configure terminal", "% Invalid input detected at '^' marker."),
        (&["enable"], "hostname R1", "% Unrecognized command"),
        (&["enable"], "show version", "% Unrecognized command"),
        (
            &["enable", "configure terminal"],
            "interface g0/9",
            "% Invalid interface",
        ),
        (
            &["enable", "configure terminal"],
            "ip route 10.0.0.0 255.0.0.0 10.0.12.256",
            "% Incomplete or invalid command",
        ),
        (
            &["enable", "configure terminal"],
            "access-list 200 permit ip any any",
            "% Invalid access-list definition",
        ),
        (
            &["enable", "configure terminal", "interface g0/0"],
            "ip address 192.168.10.1 255.255.255",
            "% Invalid IP address or mask",
        ),
        (
            &["enable", "configure terminal", "interface g0/0"],
            "ip access-group 10 both",
            "% Invalid access-group",
        ),
    ];

    for (setup, input, expected) in cases {
        let mut sim = simulator_in(setup);
        let session = sim.session().clone();
        let store = sim.store().clone();

        let response = sim.execute(input);

        assert_eq!(response.output, vec![expected], "input {input:?}");
        assert_eq!(sim.session(), &session, "input {input:?}");
        assert_eq!(sim.store(), &store, "input {input:?}");
    }
}

#[test]
fn test_unrecognized_line_depends_on_mode() {
    let expected = [
        (ModeKind::UserExec, "% Invalid input detected at '^' marker."),
        (ModeKind::PrivilegedExec, "% Unrecognized command"),
        (ModeKind::GlobalConfig, "% Unrecognized command in config mode"),
        (ModeKind::InterfaceConfig, "% Unrecognized interface config command"),
    ];
    let setups: [&[&str]; 4] = [
        &[],
        &["enable"],
        &["enable", "configure terminal"],
        &["enable", "configure terminal", "interface g0/0"],
    ];

    for ((kind, line), setup) in expected.into_iter().zip(setups) {
        let mut sim = simulator_in(setup);
        assert_eq!(sim.session().mode.kind(), kind);
        assert_eq!(sim.execute("frobnicate").output, vec![line]);
    }
}

#[test]
fn test_hostname_changes_prompt() {
    let mut sim = global_config();
    assert_eq!(sim.execute("hostname BR-Lima").prompt, "BR-Lima(config)#");
    assert_eq!(sim.execute("end").prompt, "BR-Lima#");
}

#[test]
fn test_hostname_without_argument_is_rejected() {
    let mut sim = global_config();
    let response = sim.execute("hostname");
    assert_eq!(response.output, vec!["% Unrecognized command in config mode"]);
    assert_eq!(sim.session().hostname, "Router");
}

#[test]
fn test_route_insert_is_idempotent() {
    let mut sim = global_config();
    sim.execute("ip route 10.0.0.0 255.0.0.0 10.0.12.1");
    let response = sim.execute("ip route 10.0.0.0 255.0.0.0 10.0.12.1");
    assert!(response.is_silent());
    assert_eq!(sim.store().routes.len(), 1);
}

#[test]
fn test_route_add_then_remove_restores_table() {
    let mut sim = global_config();
    sim.execute("ip route 0.0.0.0 0.0.0.0 203.0.113.1");
    sim.execute("ip route 172.16.0.0 255.255.0.0 10.0.12.1");
    let before = sim.store().routes.clone();

    sim.execute("ip route 10.0.0.0 255.0.0.0 10.0.12.1");
    assert_eq!(sim.store().routes.len(), 3);
    assert!(sim.execute("no ip route 10.0.0.0 255.0.0.0 10.0.12.1").is_silent());

    assert_eq!(sim.store().routes, before);
}

#[test]
fn test_removing_unknown_route_is_silent() {
    let mut sim = global_config();
    let response = sim.execute("no ip route 10.0.0.0 255.0.0.0 10.0.12.1");
    assert!(response.is_silent());
    assert!(sim.store().routes.is_empty());
}

#[test]
fn test_access_list_rules_accumulate() {
    let mut sim = global_config();
    for _ in 0..2 {
        assert!(sim.execute("access-list 10 permit ip any any").is_silent());
    }
    assert!(sim.execute("ACCESS-LIST 110 DENY").is_silent());
    assert_eq!(sim.store().acls.len(), 3);
}

#[test]
fn test_interface_configuration() {
    let mut sim = simulator_in(&["enable", "configure terminal", "interface G0/1"]);
    assert_eq!(sim.session().active_interface(), Some(InterfaceId::G0_1));

    for line in [
        "description  WAN   to HQ",
        "ip address 10.0.12.2 255.255.255.252",
        "ip access-group 110 in",
        "ip access-group 120 in",
        "ip access-group -5 out",
        "no shutdown",
    ] {
        assert!(sim.execute(line).is_silent(), "{line:?}");
    }

    let itf = sim.store().interfaces.get(InterfaceId::G0_1);
    assert_eq!(itf.description.as_deref(), Some("WAN to HQ"));
    assert_eq!(itf.ip_address.as_ref().map(|a| a.as_str()), Some("10.0.12.2"));
    assert_eq!(itf.acl_in, Some(120));
    assert_eq!(itf.acl_out, Some(-5));
    assert!(!itf.is_shutdown);

    sim.execute("shutdown");
    assert!(sim.store().interfaces.get(InterfaceId::G0_1).is_shutdown);
}

#[test]
fn test_help_lists_commands_for_mode() {
    let mut sim = Simulator::default();
    let user = sim.execute("?");
    assert!(user.output.iter().any(|l| l.trim_start().starts_with("enable")));
    assert!(!user.output.iter().any(|l| l.contains("configure terminal")));

    sim.execute("enable");
    let privileged = sim.execute("?");
    assert!(privileged
        .output
        .iter()
        .any(|l| l.contains("show ip interface brief")));
    assert_eq!(sim.session().mode, Mode::PrivilegedExec);
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = global_config();
    let second = Simulator::default();

    first.execute("hostname R1");
    first.execute("ip route 0.0.0.0 0.0.0.0 203.0.113.1");

    assert_eq!(second.prompt(), "Router>");
    assert!(second.store().routes.is_empty());
}
