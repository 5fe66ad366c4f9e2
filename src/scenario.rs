//! Lab scenario addressing.
//!
//! Describes the three network segments the student is asked to configure.
//! It is reference material for the interactive UI; the command dispatcher
//! never reads it.

use crate::device::InterfaceId;
use serde::{Deserialize, Serialize};

/// Addressing for one segment attached to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Network address.
    pub network: String,
    pub netmask: String,
    /// Router interface attached to this segment.
    pub interface: InterfaceId,
    /// Address the router should take on this segment.
    pub address: String,
    /// Far-end address (WAN peer or ISP gateway), if any.
    #[serde(default)]
    pub peer: Option<String>,
}

impl Segment {
    fn new(
        network: &str,
        netmask: &str,
        interface: InterfaceId,
        address: &str,
        peer: Option<&str>,
    ) -> Self {
        Self {
            network: network.to_string(),
            netmask: netmask.to_string(),
            interface,
            address: address.to_string(),
            peer: peer.map(String::from),
        }
    }
}

/// The branch-office lab: LAN, WAN link to headquarters, ISP uplink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub lan: Segment,
    pub wan: Segment,
    pub isp: Segment,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            lan: Segment::new(
                "192.168.10.0",
                "255.255.255.0",
                InterfaceId::G0_0,
                "192.168.10.1",
                None,
            ),
            wan: Segment::new(
                "10.0.12.0",
                "255.255.255.252",
                InterfaceId::G0_1,
                "10.0.12.2",
                Some("10.0.12.1"),
            ),
            isp: Segment::new(
                "203.0.113.0",
                "255.255.255.252",
                InterfaceId::G0_2,
                "203.0.113.2",
                Some("203.0.113.1"),
            ),
        }
    }
}

impl Scenario {
    /// Segments with their display labels, in panel order.
    pub fn segments(&self) -> [(&'static str, &Segment); 3] {
        [("LAN", &self.lan), ("WAN", &self.wan), ("ISP", &self.isp)]
    }

    /// Human-readable summary lines for the lab panel.
    pub fn summary_lines(&self) -> Vec<String> {
        self.segments()
            .into_iter()
            .map(|(label, seg)| {
                let mut line = format!(
                    "{label}: {} {} on {} ({})",
                    seg.network, seg.netmask, seg.interface, seg.address
                );
                if let Some(peer) = &seg.peer {
                    line.push_str(&format!(", peer {peer}"));
                }
                line
            })
            .collect()
    }
}
