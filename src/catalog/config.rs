//! Configuration primitives for the seobase workspace.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/seobase/config/config.toml on Windows
//!   $XDG_DATA_HOME/seobase/config/config.toml on Linux
//!   ~/Library/Application Support/seobase/config/config.toml on macOS
//!
//! The config carries the tuning knobs of the variant engine: the
//! language-gate threshold, the highlight cap, the suggestion call
//! budget and report paging defaults.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Heuristic builder knobs (language gate, highlight cap).
    #[serde(default)]
    pub heuristics: HeuristicsSettings,
    /// Remote suggestion call policy (opt-out, timeout).
    #[serde(default)]
    pub suggestion: SuggestionSettings,
    /// Analytics report defaults.
    #[serde(default)]
    pub reports: ReportSettings,
}

/// Tuning knobs for the heuristic content builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicsSettings {
    /// Minimum share of Cyrillic letters for a prompt to be quoted
    /// verbatim as a title. Below this the theme cascade takes over.
    #[serde(default = "default_cyrillic_ratio_threshold")]
    pub cyrillic_ratio_threshold: f32,
    /// Maximum number of highlight labels folded into a description.
    #[serde(default = "default_max_highlights")]
    pub max_highlights: usize,
}

impl Default for HeuristicsSettings {
    fn default() -> Self {
        Self {
            cyrillic_ratio_threshold: default_cyrillic_ratio_threshold(),
            max_highlights: default_max_highlights(),
        }
    }
}

fn default_cyrillic_ratio_threshold() -> f32 {
    0.6
}

const fn default_max_highlights() -> usize {
    4
}

/// Remote suggestion call policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    /// Whether the remote suggestion service may be called at all.
    /// When false the local builder is used directly.
    #[serde(default = "default_remote_allowed")]
    pub remote_allowed: bool,
    /// Wall-clock budget (ms) for one suggestion call.
    #[serde(default = "default_suggestion_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            remote_allowed: default_remote_allowed(),
            timeout_ms: default_suggestion_timeout_ms(),
        }
    }
}

const fn default_remote_allowed() -> bool {
    true
}

const fn default_suggestion_timeout_ms() -> u64 {
    8_000
}

/// Analytics report defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Row limit applied when a report request does not specify one.
    #[serde(default = "default_report_limit")]
    pub default_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_limit: default_report_limit(),
        }
    }
}

const fn default_report_limit() -> usize {
    50
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where seobase stores data.
///
/// Order of precedence:
/// 1. `SEOBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("SEOBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("seobase"))
}

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

/// Ensures the workspace structure exists (catalog/ and stats/ directories).
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let catalog_dir = root.join("catalog");
    let stats_dir = root.join("stats");
    fs::create_dir_all(&catalog_dir)?;
    fs::create_dir_all(&stats_dir)?;
    Ok(WorkspacePaths {
        root,
        catalog_dir,
        stats_dir,
    })
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub catalog_dir: PathBuf,
    pub stats_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn example_file(&self, id: uuid::Uuid) -> PathBuf {
        self.catalog_dir.join(format!("{}.json", id))
    }

    pub fn events_file(&self) -> PathBuf {
        self.root.join("events.jsonl")
    }
}
