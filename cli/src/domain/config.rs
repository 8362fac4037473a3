//! Domain types for runup configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, stored in `runup.yaml` next to the project.
///
/// Every field has a default, so a missing config file yields the stock
/// deployment: `.venv`, `requirements.txt`, `manage.py`, `0.0.0.0:8000`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunupConfig {
    /// Virtual environment settings.
    #[serde(default)]
    pub env: EnvConfig,
    /// Project file locations.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Server launch settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Virtual environment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Directory holding the isolated environment.
    #[serde(default = "default_env_path")]
    pub path: PathBuf,
    /// Interpreter used to create the environment.
    #[serde(default = "default_python")]
    pub python: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            path: default_env_path(),
            python: default_python(),
        }
    }
}

/// Project file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Dependency manifest consumed by the installer.
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Management script exposing the migration command pair.
    #[serde(default = "default_manage")]
    pub manage: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            manage: default_manage(),
        }
    }
}

/// Server launch settings.
///
/// Displayed URLs are always derived from `host` and `port`, never stored
/// separately, so they cannot drift from the bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// ASGI application path handed to the server program.
    #[serde(default = "default_app")]
    pub app: String,
    /// ASGI server module run inside the environment (`python -m <program>`).
    #[serde(default = "default_program")]
    pub program: String,
    /// API documentation path.
    #[serde(default = "default_docs_path")]
    pub docs_path: String,
    /// WebSocket path for long-lived bidirectional connections.
    #[serde(default = "default_ws_path")]
    pub ws_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            app: default_app(),
            program: default_program(),
            docs_path: default_docs_path(),
            ws_path: default_ws_path(),
        }
    }
}

impl ServerConfig {
    /// The address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The host shown in printed URLs. A wildcard bind host is not
    /// reachable as written, so it renders as `localhost`.
    #[must_use]
    pub fn display_host(&self) -> &str {
        match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        }
    }

    /// Base URL for conventional request/response traffic.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.display_host(), self.port)
    }

    /// URL of the API documentation.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("{}{}", self.base_url(), self.docs_path)
    }

    /// URL of the WebSocket endpoint.
    #[must_use]
    pub fn ws_url(&self) -> String {
        format!(
            "ws://{}:{}{}",
            self.display_host(),
            self.port,
            self.ws_path
        )
    }
}

fn default_env_path() -> PathBuf {
    PathBuf::from(".venv")
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_manifest() -> String {
    "requirements.txt".to_string()
}

fn default_manage() -> String {
    "manage.py".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

fn default_app() -> String {
    "config.asgi:application".to_string()
}

fn default_program() -> String {
    "uvicorn".to_string()
}

fn default_docs_path() -> String {
    "/api/docs".to_string()
}

fn default_ws_path() -> String {
    "/ws/orders/".to_string()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
