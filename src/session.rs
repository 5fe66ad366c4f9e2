//! Session state: modal position and hostname.
//!
//! The interface being configured is carried inside
//! [`Mode::InterfaceConfig`], so an active interface exists exactly when the
//! session is in interface configuration mode.

use crate::device::InterfaceId;
use std::fmt;

/// Default device hostname.
pub const DEFAULT_HOSTNAME: &str = "Router";

/// Position in the configuration mode hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `Router>`
    #[default]
    UserExec,
    /// `Router#`
    PrivilegedExec,
    /// `Router(config)#`
    GlobalConfig,
    /// `Router(config-if-g0/0)#`
    InterfaceConfig(InterfaceId),
}

/// A mode without its interface payload, used as a grammar key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    UserExec,
    PrivilegedExec,
    GlobalConfig,
    InterfaceConfig,
}

impl ModeKind {
    pub const ALL: [ModeKind; 4] = [
        Self::UserExec,
        Self::PrivilegedExec,
        Self::GlobalConfig,
        Self::InterfaceConfig,
    ];

    /// Short label for logs and headless state.
    pub fn label(self) -> &'static str {
        match self {
            Self::UserExec => "user-exec",
            Self::PrivilegedExec => "privileged-exec",
            Self::GlobalConfig => "global-config",
            Self::InterfaceConfig => "interface-config",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Mode {
    pub fn kind(self) -> ModeKind {
        match self {
            Self::UserExec => ModeKind::UserExec,
            Self::PrivilegedExec => ModeKind::PrivilegedExec,
            Self::GlobalConfig => ModeKind::GlobalConfig,
            Self::InterfaceConfig(_) => ModeKind::InterfaceConfig,
        }
    }

    /// The interface being configured, if any.
    pub fn active_interface(self) -> Option<InterfaceId> {
        match self {
            Self::InterfaceConfig(id) => Some(id),
            _ => None,
        }
    }

    /// One level down the hierarchy. `UserExec` stays put.
    pub fn exit(self) -> Self {
        match self {
            Self::InterfaceConfig(_) => Self::GlobalConfig,
            Self::GlobalConfig => Self::PrivilegedExec,
            Self::PrivilegedExec | Self::UserExec => Self::UserExec,
        }
    }

    /// Escape straight to privileged exec from anywhere.
    pub fn end(self) -> Self {
        Self::PrivilegedExec
    }
}

/// Modal session state owned by one simulator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub hostname: String,
    pub mode: Mode,
}

impl Session {
    /// Creates a session in user exec mode.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            mode: Mode::UserExec,
        }
    }

    pub fn active_interface(&self) -> Option<InterfaceId> {
        self.mode.active_interface()
    }

    /// Renders the mode-dependent prompt.
    pub fn prompt(&self) -> String {
        let host = &self.hostname;
        match self.mode {
            Mode::UserExec => format!("{host}>"),
            Mode::PrivilegedExec => format!("{host}#"),
            Mode::GlobalConfig => format!("{host}(config)#"),
            Mode::InterfaceConfig(id) => format!("{host}(config-if-{id})#"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_HOSTNAME)
    }
}
