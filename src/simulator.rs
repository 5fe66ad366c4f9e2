//! The router simulator.
//!
//! A [`Simulator`] owns one session's mode, hostname and configuration
//! store. Independent simulators share nothing, so each connection or
//! front end gets its own.

use crate::commands::{
    dispatch, tokenize, CommandContext, CommandError, CommandRouter, Response,
};
use crate::config::Config;
use crate::device::ConfigStore;
use crate::presenter::PresenterOptions;
use crate::session::Session;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Simulator {
    session: Session,
    store: ConfigStore,
    options: PresenterOptions,
}

impl Simulator {
    /// Creates a simulator in user exec mode with an empty configuration.
    pub fn new(hostname: impl Into<String>, options: PresenterOptions) -> Self {
        Self {
            session: Session::new(hostname),
            store: ConfigStore::new(),
            options,
        }
    }

    /// Creates a simulator from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.device.hostname.clone(), config.presenter.clone())
    }

    /// Executes one input line.
    ///
    /// Blank input produces no output and no transition. Rejected commands
    /// produce a single error line and leave all state untouched.
    pub fn execute(&mut self, input: &str) -> Response {
        let Some(line) = tokenize(input) else {
            return Response::silent(self.prompt());
        };

        let mode = self.session.mode.kind();
        let output = match CommandRouter::parse(mode, &line) {
            Ok(command) => {
                debug!(%mode, ?command, "Executing command");
                let mut ctx = CommandContext {
                    session: &mut self.session,
                    store: &mut self.store,
                    options: &self.options,
                };
                dispatch(&mut ctx, command)
            }
            Err(e) => {
                debug!(%mode, input = %input.trim(), error = %e, "Command rejected");
                vec![e.to_string()]
            }
        };

        Response::new(output, self.prompt())
    }

    /// Rejects input that could not be read as a command line.
    ///
    /// The reply is the current mode's unrecognized-command line.
    pub fn reject(&self) -> Response {
        let error = CommandError::Unrecognized(self.session.mode.kind());
        Response::new(vec![error.to_string()], self.prompt())
    }

    /// Current prompt.
    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn options(&self) -> &PresenterOptions {
        &self.options
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
