//! Command parsing and routing.
//!
//! Resolves a tokenized line against the grammar for the current mode and
//! validates its arguments, producing a [`Command`] ready for a handler.
//! Nothing here touches device state.

use super::definitions::COMMANDS;
use super::error::CommandError;
use super::tokenizer::CommandLine;
use crate::device::{AclAction, AclRule, Direction, DottedQuad, InterfaceId, StaticRoute};
use crate::session::ModeKind;

/// A validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `enable`
    Enable,
    /// `configure terminal`
    ConfigureTerminal,
    /// `exit`
    Exit,
    /// `end`
    End,
    /// `?`
    Help,
    /// `show ip interface brief`
    ShowInterfaceBrief,
    /// `show running-config`
    ShowRunningConfig,
    /// `show ip route`
    ShowIpRoute,
    /// `show access-lists`
    ShowAccessLists,
    /// `hostname <name>`
    Hostname(String),
    /// `interface <id>`
    Interface(InterfaceId),
    /// `ip route <network> <mask> <next-hop>`
    AddRoute(StaticRoute),
    /// `no ip route <network> <mask> <next-hop>`
    RemoveRoute {
        network: String,
        netmask: String,
        next_hop: String,
    },
    /// `access-list <n> <permit|deny> ip any any`
    AccessList(AclRule),
    /// `ip address <ip> <mask>`
    IpAddress { ip: DottedQuad, mask: DottedQuad },
    /// `description <text...>`
    Description(String),
    /// `shutdown`
    Shutdown,
    /// `no shutdown`
    NoShutdown,
    /// `ip access-group <n> <in|out>`
    AccessGroup { number: i64, direction: Direction },
}

/// Command router for parsing device input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses a line in the context of `mode`.
    ///
    /// The longest keyword path valid in `mode` wins; trailing tokens after
    /// fixed-keyword commands are ignored.
    pub fn parse(mode: ModeKind, line: &CommandLine) -> Result<Command, CommandError> {
        let def = COMMANDS
            .iter()
            .filter(|def| def.available_in(mode) && line.starts_with(def.path))
            .max_by_key(|def| def.path.len())
            .ok_or(CommandError::Unrecognized(mode))?;

        (def.parse)(&line.args(def.path.len()))
    }
}

pub(super) fn parse_enable(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Enable)
}

pub(super) fn parse_configure_terminal(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::ConfigureTerminal)
}

pub(super) fn parse_exit(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Exit)
}

pub(super) fn parse_end(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::End)
}

pub(super) fn parse_help(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Help)
}

pub(super) fn parse_show_interface_brief(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::ShowInterfaceBrief)
}

pub(super) fn parse_show_running_config(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::ShowRunningConfig)
}

pub(super) fn parse_show_ip_route(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::ShowIpRoute)
}

pub(super) fn parse_show_access_lists(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::ShowAccessLists)
}

/// A bare `hostname` is not a valid command at all.
pub(super) fn parse_hostname(args: &[&str]) -> Result<Command, CommandError> {
    args.first()
        .map(|name| Command::Hostname(name.to_string()))
        .ok_or(CommandError::Unrecognized(ModeKind::GlobalConfig))
}

pub(super) fn parse_interface(args: &[&str]) -> Result<Command, CommandError> {
    let name = args
        .first()
        .ok_or(CommandError::Unrecognized(ModeKind::GlobalConfig))?;
    InterfaceId::resolve(name)
        .map(Command::Interface)
        .ok_or(CommandError::InvalidInterface)
}

pub(super) fn parse_ip_route(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [network, netmask, next_hop, ..] => {
            let next_hop = DottedQuad::parse(next_hop).ok_or(CommandError::IncompleteRoute)?;
            Ok(Command::AddRoute(StaticRoute::new(*network, *netmask, next_hop)))
        }
        _ => Err(CommandError::IncompleteRoute),
    }
}

/// Missing parts become empty strings, which never match a stored route.
pub(super) fn parse_no_ip_route(args: &[&str]) -> Result<Command, CommandError> {
    let part = |i: usize| args.get(i).map(|s| s.to_string()).unwrap_or_default();
    Ok(Command::RemoveRoute {
        network: part(0),
        netmask: part(1),
        next_hop: part(2),
    })
}

pub(super) fn parse_access_list(args: &[&str]) -> Result<Command, CommandError> {
    // Only the number and action are read; every rule matches `ip any any`.
    let (number, action) = match args {
        [number, action, ..] => (number, action),
        _ => return Err(CommandError::InvalidAccessList),
    };

    let number = parse_decimal::<u16>(number).ok_or(CommandError::InvalidAccessList)?;
    let action = AclAction::parse(action).ok_or(CommandError::InvalidAccessList)?;

    AclRule::new(number, action)
        .map(Command::AccessList)
        .ok_or(CommandError::InvalidAccessList)
}

pub(super) fn parse_ip_address(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [ip, mask, ..] => {
            let ip = DottedQuad::parse(ip).ok_or(CommandError::InvalidAddress)?;
            let mask = DottedQuad::parse(mask).ok_or(CommandError::InvalidAddress)?;
            Ok(Command::IpAddress { ip, mask })
        }
        _ => Err(CommandError::InvalidAddress),
    }
}

pub(super) fn parse_description(args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Description(args.join(" ")))
}

pub(super) fn parse_shutdown(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::Shutdown)
}

pub(super) fn parse_no_shutdown(_args: &[&str]) -> Result<Command, CommandError> {
    Ok(Command::NoShutdown)
}

/// The ACL number is not range checked here.
pub(super) fn parse_access_group(args: &[&str]) -> Result<Command, CommandError> {
    let number = args
        .first()
        .and_then(|n| parse_signed_decimal(n))
        .ok_or(CommandError::InvalidAccessGroup)?;
    let direction = args
        .get(1)
        .and_then(|d| Direction::parse(d))
        .ok_or(CommandError::InvalidAccessGroup)?;
    Ok(Command::AccessGroup { number, direction })
}

/// Parses plain decimal digits only (no sign, no radix prefix).
fn parse_decimal<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Accepts an optional `+` or `-` sign. Magnitudes beyond `i64` saturate.
fn parse_signed_decimal(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}
