//! `graphwalk.toml` configuration.
//!
//! Lookup order: `./graphwalk.toml`, then `$CONFIG_DIR/graphwalk/config.toml`.
//! The first file found wins as a whole; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputMode;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "graphwalk.toml";

/// Default cap on the vertex count of rendered matrices.
pub const DEFAULT_MAX_VERTICES: usize = 50;

/// Default cap on the vertex count of any loaded or generated graph
/// (a 32 MiB adjacency matrix).
pub const DEFAULT_MAX_GRAPH_VERTICES: usize = 16_384;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Widest matrix `show --matrix` and `closure` will render.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    /// Largest graph that is built at all.
    #[serde(default = "default_max_graph_vertices")]
    pub max_graph_vertices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            max_graph_vertices: default_max_graph_vertices(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Insert every edge in both directions.
    #[serde(default)]
    pub undirected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<String>,
}

const fn default_max_vertices() -> usize {
    DEFAULT_MAX_VERTICES
}

const fn default_max_graph_vertices() -> usize {
    DEFAULT_MAX_GRAPH_VERTICES
}

impl Config {
    /// The configured output mode, if set to a recognized name.
    pub fn output_mode(&self) -> Option<OutputMode> {
        let raw = self.output.format.as_deref()?;
        let mode = OutputMode::from_name(raw);
        if mode.is_none() {
            tracing::warn!(format = raw, "ignoring unknown output.format in config");
        }
        mode
    }
}

/// Load the first config file found, or defaults.
pub fn load_config(project_root: &Path) -> Result<Config> {
    match config_path(project_root) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Parse one config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn config_path(project_root: &Path) -> Option<PathBuf> {
    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }
    let user = dirs::config_dir()?.join("graphwalk/config.toml");
    user.is_file().then_some(user)
}
