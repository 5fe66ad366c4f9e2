//! Inspection handlers (`show ...`).

use super::{CommandContext, CommandResult};
use crate::presenter::show;

pub fn handle_interface_brief(ctx: &mut CommandContext<'_>) -> CommandResult {
    show::interface_brief(&ctx.store.interfaces)
}

pub fn handle_running_config(ctx: &mut CommandContext<'_>) -> CommandResult {
    show::running_config(&ctx.session.hostname, ctx.store)
}

pub fn handle_ip_route(ctx: &mut CommandContext<'_>) -> CommandResult {
    show::ip_route(&ctx.store.routes)
}

pub fn handle_access_lists(ctx: &mut CommandContext<'_>) -> CommandResult {
    show::access_lists(ctx.store, ctx.options.acl_labels)
}
