//! Command rejection errors.
//!
//! The `Display` form of each variant is the exact line the device prints.
//! Rejections never change session or configuration state.

use crate::session::ModeKind;
use thiserror::Error;

/// Why a command line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The command is not part of the grammar for this mode.
    #[error("{}", unrecognized_line(*.0))]
    Unrecognized(ModeKind),

    #[error("% Invalid interface")]
    InvalidInterface,

    #[error("% Incomplete or invalid command")]
    IncompleteRoute,

    #[error("% Invalid access-list definition")]
    InvalidAccessList,

    #[error("% Invalid IP address or mask")]
    InvalidAddress,

    #[error("% Invalid access-group")]
    InvalidAccessGroup,
}

fn unrecognized_line(mode: ModeKind) -> &'static str {
    match mode {
        ModeKind::UserExec => "% Invalid input detected at '^' marker.",
        ModeKind::PrivilegedExec => "% Unrecognized command",
        ModeKind::GlobalConfig => "% Unrecognized command in config mode",
        ModeKind::InterfaceConfig => "% Unrecognized interface config command",
    }
}
