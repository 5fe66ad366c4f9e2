//! Tests that drive the routerlab binary.

pub mod batch_test;
pub mod common;
pub mod headless_test;
