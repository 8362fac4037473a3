//! Shared helpers for unit tests.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Build an `ExitStatus` carrying the given exit code.
pub fn exit_status(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}
