//! Command handlers.
//!
//! Each handler receives an already validated [`Command`] payload and the
//! state it is allowed to touch, and returns the output lines to print.

pub mod exec;
pub mod global;
pub mod interface;
pub mod show;

use super::router::Command;
use crate::device::ConfigStore;
use crate::presenter::PresenterOptions;
use crate::session::Session;

/// State provided to command handlers.
pub struct CommandContext<'a> {
    /// Mode and hostname.
    pub session: &'a mut Session,
    /// Device configuration.
    pub store: &'a mut ConfigStore,
    /// Presentation settings for `show` output.
    pub options: &'a PresenterOptions,
}

/// Output lines produced by a handler.
pub type CommandResult = Vec<String>;

/// Runs a validated command against the context.
pub fn dispatch(ctx: &mut CommandContext<'_>, command: Command) -> CommandResult {
    match command {
        Command::Enable => exec::handle_enable(ctx),
        Command::ConfigureTerminal => exec::handle_configure_terminal(ctx),
        Command::Exit => exec::handle_exit(ctx),
        Command::End => exec::handle_end(ctx),
        Command::Help => exec::handle_help(ctx),
        Command::ShowInterfaceBrief => show::handle_interface_brief(ctx),
        Command::ShowRunningConfig => show::handle_running_config(ctx),
        Command::ShowIpRoute => show::handle_ip_route(ctx),
        Command::ShowAccessLists => show::handle_access_lists(ctx),
        Command::Hostname(name) => global::handle_hostname(ctx, name),
        Command::Interface(id) => global::handle_interface(ctx, id),
        Command::AddRoute(route) => global::handle_add_route(ctx, route),
        Command::RemoveRoute {
            network,
            netmask,
            next_hop,
        } => global::handle_remove_route(ctx, &network, &netmask, &next_hop),
        Command::AccessList(rule) => global::handle_access_list(ctx, rule),
        Command::IpAddress { ip, mask } => interface::handle_ip_address(ctx, ip, mask),
        Command::Description(text) => interface::handle_description(ctx, text),
        Command::Shutdown => interface::handle_shutdown(ctx, true),
        Command::NoShutdown => interface::handle_shutdown(ctx, false),
        Command::AccessGroup { number, direction } => {
            interface::handle_access_group(ctx, number, direction)
        }
    }
}
