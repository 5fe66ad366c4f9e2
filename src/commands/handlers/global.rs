//! Global configuration handlers.

use super::{CommandContext, CommandResult};
use crate::device::{AclRule, InterfaceId, StaticRoute};
use crate::session::Mode;

/// Handle `hostname <name>`.
pub fn handle_hostname(ctx: &mut CommandContext<'_>, name: String) -> CommandResult {
    ctx.session.hostname = name;
    Vec::new()
}

/// Handle `interface <id>`.
pub fn handle_interface(ctx: &mut CommandContext<'_>, id: InterfaceId) -> CommandResult {
    ctx.session.mode = Mode::InterfaceConfig(id);
    Vec::new()
}

/// Handle `ip route`. Re-adding an existing route is accepted silently.
pub fn handle_add_route(ctx: &mut CommandContext<'_>, route: StaticRoute) -> CommandResult {
    if !ctx.store.routes.insert(route) {
        tracing::debug!("Static route already present");
    }
    Vec::new()
}

/// Handle `no ip route`. Removing an unknown route is a no-op.
pub fn handle_remove_route(
    ctx: &mut CommandContext<'_>,
    network: &str,
    netmask: &str,
    next_hop: &str,
) -> CommandResult {
    if !ctx.store.routes.remove(network, netmask, next_hop) {
        tracing::debug!(network, netmask, next_hop, "No matching static route");
    }
    Vec::new()
}

/// Handle `access-list`.
pub fn handle_access_list(ctx: &mut CommandContext<'_>, rule: AclRule) -> CommandResult {
    ctx.store.acls.push(rule);
    Vec::new()
}
