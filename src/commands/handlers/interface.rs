//! Interface configuration handlers.
//!
//! All of them act on the interface carried by the current mode.

use super::{CommandContext, CommandResult};
use crate::commands::error::CommandError;
use crate::device::{Direction, DottedQuad, Interface};

/// Runs `f` on the active interface. Outside interface mode the command is
/// rejected as unrecognized.
fn with_active(
    ctx: &mut CommandContext<'_>,
    f: impl FnOnce(&mut Interface),
) -> CommandResult {
    match ctx.session.active_interface() {
        Some(id) => {
            f(ctx.store.interfaces.get_mut(id));
            Vec::new()
        }
        None => vec![CommandError::Unrecognized(ctx.session.mode.kind()).to_string()],
    }
}

/// Handle `ip address <ip> <mask>`.
pub fn handle_ip_address(
    ctx: &mut CommandContext<'_>,
    ip: DottedQuad,
    mask: DottedQuad,
) -> CommandResult {
    with_active(ctx, |itf| itf.set_address(ip, mask))
}

/// Handle `description <text...>`.
pub fn handle_description(ctx: &mut CommandContext<'_>, text: String) -> CommandResult {
    with_active(ctx, |itf| itf.description = Some(text))
}

/// Handle `shutdown` and `no shutdown`.
pub fn handle_shutdown(ctx: &mut CommandContext<'_>, shutdown: bool) -> CommandResult {
    with_active(ctx, |itf| itf.is_shutdown = shutdown)
}

/// Handle `ip access-group <n> <in|out>`.
pub fn handle_access_group(
    ctx: &mut CommandContext<'_>,
    number: i64,
    direction: Direction,
) -> CommandResult {
    with_active(ctx, |itf| itf.bind_acl(number, direction))
}
