//! Static route table.

use super::address::DottedQuad;

/// A static route. Network and mask are stored as entered; only the next
/// hop is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticRoute {
    pub network: String,
    pub netmask: String,
    pub next_hop: DottedQuad,
}

impl StaticRoute {
    pub fn new(
        network: impl Into<String>,
        netmask: impl Into<String>,
        next_hop: DottedQuad,
    ) -> Self {
        Self {
            network: network.into(),
            netmask: netmask.into(),
            next_hop,
        }
    }

    fn matches(&self, network: &str, netmask: &str, next_hop: &str) -> bool {
        self.network == network && self.netmask == netmask && self.next_hop.as_str() == next_hop
    }
}

/// Ordered set of static routes: insertion order is kept for display and
/// identical triples are never stored twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<StaticRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route unless an identical one exists. Returns true if added.
    pub fn insert(&mut self, route: StaticRoute) -> bool {
        if self.routes.contains(&route) {
            return false;
        }
        self.routes.push(route);
        true
    }

    /// Removes the route matching the triple exactly. Returns true if one was removed.
    pub fn remove(&mut self, network: &str, netmask: &str, next_hop: &str) -> bool {
        let before = self.routes.len();
        self.routes.retain(|r| !r.matches(network, netmask, next_hop));
        self.routes.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaticRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
