//! Session-level tests through the library API.

pub mod config_test;
pub mod session_test;
pub mod show_test;
