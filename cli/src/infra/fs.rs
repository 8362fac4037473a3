//! Filesystem infrastructure — implements `LocalFs`.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct HostFs;

impl LocalFs for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
