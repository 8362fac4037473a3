//! Domain layer — pure types and validators.
//!
//! This layer has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `crate::output`.

pub mod bootstrap;
pub mod config;
pub mod error;
