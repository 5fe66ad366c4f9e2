//! Mode navigation handlers (enable, configure terminal, exit, end, ?).

use super::{CommandContext, CommandResult};
use crate::commands::help::help_lines;
use crate::session::Mode;

/// Handle `enable`.
pub fn handle_enable(ctx: &mut CommandContext<'_>) -> CommandResult {
    ctx.session.mode = Mode::PrivilegedExec;
    Vec::new()
}

/// Handle `configure terminal`.
pub fn handle_configure_terminal(ctx: &mut CommandContext<'_>) -> CommandResult {
    ctx.session.mode = Mode::GlobalConfig;
    Vec::new()
}

/// Handle `exit`.
pub fn handle_exit(ctx: &mut CommandContext<'_>) -> CommandResult {
    ctx.session.mode = ctx.session.mode.exit();
    Vec::new()
}

/// Handle `end`.
pub fn handle_end(ctx: &mut CommandContext<'_>) -> CommandResult {
    ctx.session.mode = ctx.session.mode.end();
    Vec::new()
}

/// Handle `?`.
pub fn handle_help(ctx: &mut CommandContext<'_>) -> CommandResult {
    help_lines(ctx.session.mode.kind())
}
