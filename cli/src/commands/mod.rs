//! Command implementations

pub mod migrate;
pub mod provision;
pub mod serve;
pub mod up;
pub mod version;
