//! Formatters for the `show` commands.
//!
//! Column widths and literal lines match the device's real output so that
//! transcripts can be compared byte for byte.

use super::AclLabelPolicy;
use crate::device::{AclKind, ConfigStore, Interface, InterfaceTable, RouteTable};

pub const BRIEF_HEADER: &str = "Interface       IP-Address      OK? Method Status    Protocol";
pub const NO_ROUTES: &str = "Gateway of last resort is not set";
pub const NO_ACLS: &str = "No access list is configured";

const ID_WIDTH: usize = 15;
const ADDRESS_WIDTH: usize = 15;
const STATUS_WIDTH: usize = 10;

/// `show ip interface brief`
pub fn interface_brief(interfaces: &InterfaceTable) -> Vec<String> {
    std::iter::once(BRIEF_HEADER.to_string())
        .chain(interfaces.iter().map(brief_row))
        .collect()
}

fn brief_row(itf: &Interface) -> String {
    let address = itf
        .ip_address
        .as_ref()
        .map_or("unassigned", |ip| ip.as_str());
    let (status, protocol) = if itf.is_shutdown {
        ("administratively down", "down")
    } else {
        ("up", "up")
    };
    format!(
        "{:<ID_WIDTH$} {:<ADDRESS_WIDTH$} YES manual {:<STATUS_WIDTH$} {}",
        itf.id.short_name(),
        address,
        status,
        protocol
    )
}

/// `show running-config`
pub fn running_config(hostname: &str, store: &ConfigStore) -> Vec<String> {
    let mut lines = vec![
        "Building configuration...".to_string(),
        String::new(),
        format!("hostname {hostname}"),
    ];

    for itf in store.interfaces.iter() {
        lines.push(format!("interface {}", itf.id));
        if let Some(description) = itf.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!(" description {description}"));
        }
        if let Some((ip, mask)) = itf.address() {
            lines.push(format!(" ip address {ip} {mask}"));
        }
        lines.extend(itf.access_groups().map(|(number, direction)| {
            format!(" ip access-group {number} {}", direction.as_str())
        }));
        lines.push(if itf.is_shutdown { " shutdown" } else { " no shutdown" }.to_string());
        lines.push("!".to_string());
    }

    lines.extend(
        store
            .routes
            .iter()
            .map(|r| format!("ip route {} {} {}", r.network, r.netmask, r.next_hop)),
    );
    lines
}

/// `show ip route`
pub fn ip_route(routes: &RouteTable) -> Vec<String> {
    if routes.is_empty() {
        return vec![NO_ROUTES.to_string()];
    }
    routes
        .iter()
        .map(|r| format!("S    {} {} [1/0] via {}", r.network, r.netmask, r.next_hop))
        .collect()
}

/// `show access-lists`
pub fn access_lists(store: &ConfigStore, policy: AclLabelPolicy) -> Vec<String> {
    let groups = store.acls.grouped();
    if groups.is_empty() {
        return vec![NO_ACLS.to_string()];
    }

    let mut lines = Vec::with_capacity(store.acls.len() + groups.len());
    for (number, rules) in groups {
        lines.push(format!("{} {number}", acl_label(number, policy)));
        lines.extend(
            rules
                .into_iter()
                .map(|rule| format!("    {} {}", rule.action, rule.pattern())),
        );
    }
    lines
}

fn acl_label(number: u16, policy: AclLabelPolicy) -> &'static str {
    match (policy, AclKind::of(number)) {
        (AclLabelPolicy::ByRange, AclKind::Extended) => "Extended IP access list",
        _ => "Standard IP access list",
    }
}
