//! Small utilities shared by the workspace's crates.

pub mod debug_log;
pub mod ui;
pub mod uid;
