//! Application services — one per bootstrap stage, plus the sequencer.
//!
//! Each service imports only from `crate::domain` and
//! `crate::application::ports`. All I/O is routed through injected port
//! traits so every stage is independently testable with mocks.

pub mod install;
pub mod launch;
pub mod migrate;
pub mod provision;
pub mod sequence;
