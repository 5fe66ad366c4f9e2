//! Device configuration store.
//!
//! Holds everything the configuration commands mutate: the interface table,
//! static routes and ACL rules. Only the command handlers write to it.

pub mod acl;
pub mod address;
pub mod interface;
pub mod routes;

pub use acl::{AclAction, AclKind, AclRule, AclTable};
pub use address::DottedQuad;
pub use interface::{Direction, Interface, InterfaceId, InterfaceTable};
pub use routes::{RouteTable, StaticRoute};

/// The device's running configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    pub interfaces: InterfaceTable,
    pub routes: RouteTable,
    pub acls: AclTable,
}

impl ConfigStore {
    /// Creates a store with unconfigured interfaces and no routes or ACLs.
    pub fn new() -> Self {
        Self::default()
    }
}
