//! routerlab - An interactive branch-office router CLI simulator.
//!
//! This library exposes the core modules for use by the binary and the
//! integration tests.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod scenario;
pub mod server;
pub mod session;
pub mod simulator;
pub mod tui;

pub use simulator::Simulator;
