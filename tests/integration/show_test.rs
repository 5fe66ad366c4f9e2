//! `show` output after configuring a device through commands.

use pretty_assertions::assert_eq;
use routerlab::presenter::{AclLabelPolicy, PresenterOptions};
use routerlab::Simulator;

fn run(sim: &mut Simulator, lines: &[&str]) {
    for line in lines {
        let response = sim.execute(line);
        assert!(response.is_silent(), "{line:?} produced {:?}", response.output);
    }
}

#[test]
fn test_brief_after_configuring_lan_interface() {
    let mut sim = Simulator::default();
    run(
        &mut sim,
        &[
            "enable",
            "configure terminal",
            "interface g0/0",
            "ip address 192.168.10.1 255.255.255.0",
            "no shutdown",
            "exit",
            "exit",
        ],
    );

    assert_eq!(
        sim.execute("show ip interface brief").output,
        vec![
            "Interface       IP-Address      OK? Method Status    Protocol",
            "g0/0            192.168.10.1    YES manual up         up",
            "g0/1            unassigned      YES manual administratively down down",
            "g0/2            unassigned      YES manual administratively down down",
        ]
    );
}

#[test]
fn test_default_route_scenario() {
    let mut sim = Simulator::default();
    run(&mut sim, &["enable"]);
    assert_eq!(
        sim.execute("show ip route").output,
        vec!["Gateway of last resort is not set"]
    );

    run(
        &mut sim,
        &["configure terminal", "ip route 0.0.0.0 0.0.0.0 203.0.113.1", "end"],
    );
    assert_eq!(
        sim.execute("show ip route").output,
        vec!["S    0.0.0.0 0.0.0.0 [1/0] via 203.0.113.1"]
    );
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let mut sim = Simulator::default();
    run(&mut sim, &["enable"]);
    assert_eq!(
        sim.execute("show ip route detail").output,
        vec!["Gateway of last resort is not set"]
    );
}

#[test]
fn test_access_lists_from_either_mode() {
    let mut sim = Simulator::default();
    run(&mut sim, &["enable", "configure terminal"]);
    assert_eq!(
        sim.execute("show access-lists").output,
        vec!["No access list is configured"]
    );

    run(
        &mut sim,
        &[
            "access-list 100 permit ip any any",
            "access-list 10 deny ip any any",
            "access-list 100 deny ip any any",
            "end",
        ],
    );
    assert_eq!(
        sim.execute("show access-lists").output,
        vec![
            "Standard IP access list 10",
            "    deny ip any any",
            "Standard IP access list 100",
            "    permit ip any any",
            "    deny ip any any",
        ]
    );
}

#[test]
fn test_access_list_records_any_any_for_other_criteria() {
    let mut sim = Simulator::default();
    run(
        &mut sim,
        &[
            "enable",
            "configure terminal",
            "access-list 110 deny tcp any host 10.0.0.1",
        ],
    );
    assert_eq!(
        sim.execute("show access-lists").output,
        vec!["Standard IP access list 110", "    deny ip any any"]
    );
}

#[test]
fn test_access_list_labels_by_range() {
    let options = PresenterOptions {
        acl_labels: AclLabelPolicy::ByRange,
        ..PresenterOptions::default()
    };
    let mut sim = Simulator::new("Router", options);
    run(
        &mut sim,
        &["enable", "configure terminal", "access-list 100 permit ip any any"],
    );
    assert_eq!(
        sim.execute("show access-lists").output,
        vec!["Extended IP access list 100", "    permit ip any any"]
    );
}

#[test]
fn test_running_config_reflects_session() {
    let mut sim = Simulator::default();
    run(
        &mut sim,
        &[
            "enable",
            "configure terminal",
            "hostname BR1",
            "interface gigabitethernet0/2",
            "description ISP uplink",
            "ip address 203.0.113.2 255.255.255.252",
            "ip access-group 100 in",
            "no shutdown",
            "exit",
            "ip route 0.0.0.0 0.0.0.0 203.0.113.1",
            "end",
        ],
    );

    assert_eq!(
        sim.execute("show running-config").output,
        vec![
            "Building configuration...",
            "",
            "hostname BR1",
            "interface g0/0",
            " shutdown",
            "!",
            "interface g0/1",
            " shutdown",
            "!",
            "interface g0/2",
            " description ISP uplink",
            " ip address 203.0.113.2 255.255.255.252",
            " ip access-group 100 in",
            " no shutdown",
            "!",
            "ip route 0.0.0.0 0.0.0.0 203.0.113.1",
        ]
    );
}

#[test]
fn test_show_is_not_available_in_user_exec() {
    let mut sim = Simulator::default();
    assert_eq!(
        sim.execute("show running-config").output,
        vec!["% Invalid input detected at '^' marker."]
    );
}
