//! Declarative command grammar.
//!
//! Every command is described once here: the keyword path that selects it,
//! the modes it is valid in, its help text and the function that validates
//! its arguments. The router and the `?` help both read this table, so the
//! grammar is auditable per mode in one place.

use super::error::CommandError;
use super::router::{self, Command};
use crate::session::ModeKind;

/// Validates the arguments following a command's keyword path.
pub type ParseFn = fn(&[&str]) -> Result<Command, CommandError>;

/// Definition of a command.
#[derive(Clone, Copy)]
pub struct CommandDef {
    /// Keywords selecting this command, matched case-insensitively.
    pub path: &'static [&'static str],
    /// Modes in which the command is accepted.
    pub modes: &'static [ModeKind],
    /// Usage shown by `?`.
    pub usage: &'static str,
    /// Short description shown by `?`.
    pub description: &'static str,
    /// Argument validation.
    pub parse: ParseFn,
}

impl std::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("path", &self.path)
            .field("modes", &self.modes)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

impl CommandDef {
    /// Returns true if the command is accepted in `mode`.
    pub fn available_in(&self, mode: ModeKind) -> bool {
        self.modes.contains(&mode)
    }
}

const ANY_MODE: &[ModeKind] = &ModeKind::ALL;
const USER: &[ModeKind] = &[ModeKind::UserExec];
const PRIVILEGED: &[ModeKind] = &[ModeKind::PrivilegedExec];
const GLOBAL: &[ModeKind] = &[ModeKind::GlobalConfig];
const PRIVILEGED_OR_GLOBAL: &[ModeKind] = &[ModeKind::PrivilegedExec, ModeKind::GlobalConfig];
const INTERFACE: &[ModeKind] = &[ModeKind::InterfaceConfig];

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    // Mode navigation
    CommandDef {
        path: &["enable"],
        modes: USER,
        usage: "enable",
        description: "Turn on privileged commands",
        parse: router::parse_enable,
    },
    CommandDef {
        path: &["configure", "terminal"],
        modes: PRIVILEGED,
        usage: "configure terminal",
        description: "Enter configuration mode",
        parse: router::parse_configure_terminal,
    },
    CommandDef {
        path: &["exit"],
        modes: ANY_MODE,
        usage: "exit",
        description: "Exit the current mode",
        parse: router::parse_exit,
    },
    CommandDef {
        path: &["end"],
        modes: ANY_MODE,
        usage: "end",
        description: "Return to privileged exec mode",
        parse: router::parse_end,
    },
    CommandDef {
        path: &["?"],
        modes: ANY_MODE,
        usage: "?",
        description: "List the commands available in this mode",
        parse: router::parse_help,
    },
    // Inspection
    CommandDef {
        path: &["show", "ip", "interface", "brief"],
        modes: PRIVILEGED,
        usage: "show ip interface brief",
        description: "Interface addressing and status summary",
        parse: router::parse_show_interface_brief,
    },
    CommandDef {
        path: &["show", "running-config"],
        modes: PRIVILEGED,
        usage: "show running-config",
        description: "Current operating configuration",
        parse: router::parse_show_running_config,
    },
    CommandDef {
        path: &["show", "ip", "route"],
        modes: PRIVILEGED,
        usage: "show ip route",
        description: "IP routing table",
        parse: router::parse_show_ip_route,
    },
    CommandDef {
        path: &["show", "access-lists"],
        modes: PRIVILEGED_OR_GLOBAL,
        usage: "show access-lists",
        description: "List access lists",
        parse: router::parse_show_access_lists,
    },
    // Global configuration
    CommandDef {
        path: &["hostname"],
        modes: GLOBAL,
        usage: "hostname <name>",
        description: "Set the system's network name",
        parse: router::parse_hostname,
    },
    CommandDef {
        path: &["interface"],
        modes: GLOBAL,
        usage: "interface <g0/0|g0/1|g0/2>",
        description: "Select an interface to configure",
        parse: router::parse_interface,
    },
    CommandDef {
        path: &["ip", "route"],
        modes: GLOBAL,
        usage: "ip route <network> <mask> <next-hop>",
        description: "Add a static route",
        parse: router::parse_ip_route,
    },
    CommandDef {
        path: &["no", "ip", "route"],
        modes: GLOBAL,
        usage: "no ip route <network> <mask> <next-hop>",
        description: "Remove a static route",
        parse: router::parse_no_ip_route,
    },
    CommandDef {
        path: &["access-list"],
        modes: GLOBAL,
        usage: "access-list <1-199> <permit|deny> ip any any",
        description: "Add an access list entry",
        parse: router::parse_access_list,
    },
    // Interface configuration
    CommandDef {
        path: &["ip", "address"],
        modes: INTERFACE,
        usage: "ip address <address> <mask>",
        description: "Set the interface IP address",
        parse: router::parse_ip_address,
    },
    CommandDef {
        path: &["description"],
        modes: INTERFACE,
        usage: "description <text>",
        description: "Interface specific description",
        parse: router::parse_description,
    },
    CommandDef {
        path: &["shutdown"],
        modes: INTERFACE,
        usage: "shutdown",
        description: "Administratively disable the interface",
        parse: router::parse_shutdown,
    },
    CommandDef {
        path: &["no", "shutdown"],
        modes: INTERFACE,
        usage: "no shutdown",
        description: "Enable the interface",
        parse: router::parse_no_shutdown,
    },
    CommandDef {
        path: &["ip", "access-group"],
        modes: INTERFACE,
        usage: "ip access-group <number> <in|out>",
        description: "Apply an access list to the interface",
        parse: router::parse_access_group,
    },
];

/// Returns the commands accepted in `mode`, in table order.
pub fn commands_for(mode: ModeKind) -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(move |def| def.available_in(mode))
}
