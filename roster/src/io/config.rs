//! Server configuration stored in `roster.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::catalog::default_catalog;
use crate::core::invariants::validate_catalog;
use crate::core::types::CatalogEntry;

/// Roster configuration (TOML).
///
/// Missing fields default to values suitable for local development. An empty
/// `activities` list means the built-in catalog is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    pub server: ServerConfig,

    /// Seed catalog loaded once at startup.
    pub activities: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind: String,

    pub port: u16,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.server.bind.trim().is_empty() {
            errors.push("server.bind must not be empty".to_string());
        }
        if self.server.port == 0 {
            errors.push("server.port must be > 0".to_string());
        }
        errors.extend(validate_catalog(&self.activities));
        if errors.is_empty() {
            return Ok(());
        }
        Err(anyhow!("invalid config: {}", errors.join("; ")))
    }

    /// Configured catalog, or the built-in one when none is listed.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        if self.activities.is_empty() {
            default_catalog()
        } else {
            self.activities.clone()
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
