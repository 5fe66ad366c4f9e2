//! Physical interfaces of the simulated router.
//!
//! The interface set is closed and known at compile time, so the table is a
//! fixed-size array indexed by [`InterfaceId`] rather than a map.

use super::address::DottedQuad;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the router's fixed interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterfaceId {
    /// GigabitEthernet0/0 (LAN side in the lab scenario).
    #[serde(rename = "g0/0", alias = "gigabitethernet0/0")]
    G0_0,
    /// GigabitEthernet0/1 (WAN side).
    #[serde(rename = "g0/1", alias = "gigabitethernet0/1")]
    G0_1,
    /// GigabitEthernet0/2 (ISP uplink).
    #[serde(rename = "g0/2", alias = "gigabitethernet0/2")]
    G0_2,
}

impl InterfaceId {
    /// All interfaces in display order.
    pub const ALL: [InterfaceId; 3] = [Self::G0_0, Self::G0_1, Self::G0_2];

    /// Canonical short name, used in prompts and show output.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::G0_0 => "g0/0",
            Self::G0_1 => "g0/1",
            Self::G0_2 => "g0/2",
        }
    }

    /// Long name accepted by the `interface` command.
    pub fn long_name(self) -> &'static str {
        match self {
            Self::G0_0 => "gigabitethernet0/0",
            Self::G0_1 => "gigabitethernet0/1",
            Self::G0_2 => "gigabitethernet0/2",
        }
    }

    /// Resolves a short or long name, case-insensitively.
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.short_name() == name || id.long_name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Direction an access list is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Parses `in` or `out`, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Configuration of a single interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Stable identifier.
    pub id: InterfaceId,
    /// Configured address, if any.
    pub ip_address: Option<DottedQuad>,
    /// Configured netmask, if any.
    pub netmask: Option<DottedQuad>,
    /// Free-form description.
    pub description: Option<String>,
    /// Administratively down until `no shutdown`.
    pub is_shutdown: bool,
    /// ACL bound inbound.
    pub acl_in: Option<i64>,
    /// ACL bound outbound.
    pub acl_out: Option<i64>,
}

impl Interface {
    /// Creates an unconfigured, shut down interface.
    pub fn new(id: InterfaceId) -> Self {
        Self {
            id,
            ip_address: None,
            netmask: None,
            description: None,
            is_shutdown: true,
            acl_in: None,
            acl_out: None,
        }
    }

    /// Sets address and mask together.
    pub fn set_address(&mut self, ip: DottedQuad, mask: DottedQuad) {
        self.ip_address = Some(ip);
        self.netmask = Some(mask);
    }

    /// Returns the address and mask only when both are configured.
    pub fn address(&self) -> Option<(&DottedQuad, &DottedQuad)> {
        match (&self.ip_address, &self.netmask) {
            (Some(ip), Some(mask)) => Some((ip, mask)),
            _ => None,
        }
    }

    /// Bound ACLs, inbound first.
    pub fn access_groups(&self) -> impl Iterator<Item = (i64, Direction)> {
        [(self.acl_in, Direction::In), (self.acl_out, Direction::Out)]
            .into_iter()
            .filter_map(|(number, direction)| number.map(|n| (n, direction)))
    }

    /// Binds an ACL in one direction, replacing any previous binding.
    pub fn bind_acl(&mut self, number: i64, direction: Direction) {
        match direction {
            Direction::In => self.acl_in = Some(number),
            Direction::Out => self.acl_out = Some(number),
        }
    }
}

/// Fixed table holding every interface of the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceTable {
    entries: [Interface; 3],
}

impl InterfaceTable {
    /// Creates the table with every interface in its default state.
    pub fn new() -> Self {
        Self {
            entries: InterfaceId::ALL.map(Interface::new),
        }
    }

    pub fn get(&self, id: InterfaceId) -> &Interface {
        &self.entries[id.index()]
    }

    pub fn get_mut(&mut self, id: InterfaceId) -> &mut Interface {
        &mut self.entries[id.index()]
    }

    /// Iterates in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Interface> {
        self.entries.iter()
    }
}

impl Default for InterfaceTable {
    fn default() -> Self {
        Self::new()
    }
}
