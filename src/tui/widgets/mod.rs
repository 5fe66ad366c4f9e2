//! TUI widgets for routerlab.

pub mod header;
pub mod input;
pub mod lab;
pub mod transcript;
