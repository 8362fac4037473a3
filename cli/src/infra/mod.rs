//! Infrastructure layer — production implementations of the application
//! ports.

pub mod command_runner;
pub mod config;
pub mod fs;
pub mod network;
