//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::RunupConfig;

/// Production implementation of `ConfigStore` that reads a project-local
/// YAML file. A missing file yields the defaults; a malformed file is a
/// fatal configuration error.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<RunupConfig> {
        let path = self.path();
        if !path.exists() {
            return Ok(RunupConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> PathBuf {
        if let Ok(val) = std::env::var("RUNUP_CONFIG") {
            return PathBuf::from(val);
        }
        PathBuf::from("runup.yaml")
    }
}
