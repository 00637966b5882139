//! Project and user configuration.
//!
//! Two TOML files share one schema:
//!
//! - project: `sixrooms.toml` in the working directory
//! - user: `<config_dir>/sixrooms/config.toml`
//!
//! Missing files yield defaults. For every key the project value wins over
//! the user value; command-line flags win over both.
//!
//! ```toml
//! output = "json"
//!
//! [generate]
//! layout = 3
//! seed = 42
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = "sixrooms.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Fixed catalog index instead of a random layout.
    #[serde(default)]
    pub layout: Option<usize>,
    /// Fixed random seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Project and user config side by side.
#[derive(Debug, Clone, Default)]
pub struct EffectiveConfig {
    pub project: FileConfig,
    pub user: FileConfig,
}

impl EffectiveConfig {
    pub fn output(&self) -> Option<&str> {
        self.project
            .output
            .as_deref()
            .or(self.user.output.as_deref())
    }

    pub const fn layout(&self) -> Option<usize> {
        match self.project.generate.layout {
            Some(layout) => Some(layout),
            None => self.user.generate.layout,
        }
    }

    pub const fn seed(&self) -> Option<u64> {
        match self.project.generate.seed {
            Some(seed) => Some(seed),
            None => self.user.generate.seed,
        }
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<FileConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_project_config(project_root: &Path) -> Result<FileConfig> {
    load_file(&project_root.join(PROJECT_CONFIG_FILE))
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sixrooms/config.toml"))
}

pub fn load_user_config() -> Result<FileConfig> {
    let Some(path) = user_config_path() else {
        return Ok(FileConfig::default());
    };
    load_file(&path)
}

pub fn resolve_config(project_root: &Path) -> Result<EffectiveConfig> {
    Ok(EffectiveConfig {
        project: load_project_config(project_root)?,
        user: load_user_config()?,
    })
}
