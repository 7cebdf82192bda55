// Library exports for clogview
// This allows the test suite to import modules

pub mod clipboard;
pub mod command;
pub mod config;
pub mod host;
pub mod log;
pub mod operations;
pub mod view;
