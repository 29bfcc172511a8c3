// ============================================================
// Layer 6 — Config File
// ============================================================
// Saves and restores AppConfig as pretty-printed JSON.
//
// Keys missing from the file take their default values, so a
// file can hold just the settings a deployment changes.

use anyhow::{bail, Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::application::config::AppConfig;

pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config from JSON.
    pub fn load(&self) -> Result<AppConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded config from '{}'", self.path.display());
        Ok(cfg)
    }

    /// Write the config as JSON. Refuses to replace an existing
    /// file unless `overwrite` is set.
    pub fn save(&self, cfg: &AppConfig, overwrite: bool) -> Result<()> {
        if self.path.exists() && !overwrite {
            bail!(
                "'{}' already exists (pass --force to overwrite)",
                self.path.display()
            );
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved config to '{}'", self.path.display());
        Ok(())
    }
}
