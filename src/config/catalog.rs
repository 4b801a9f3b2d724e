use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;

use crate::error::CatalogError;

/// Environment variable that points at an explicit `catalog.toml`.
pub const CONFIG_ENV_VAR: &str = "COURSE_CATALOG_CONFIG";

/// Thresholds used by level classification and lesson selection.
///
/// Every field has a default, so a `catalog.toml` only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// A topic with `p` at or above this value counts as mastered.
    pub mastery_threshold: f64,
    /// Mastered fraction above which a learner is advanced.
    pub advanced_fraction: f64,
    /// Mastered fraction above which a learner is intermediate.
    pub intermediate_fraction: f64,
    /// Weak-topic fraction above which the course starts from lesson 1.
    pub weak_fraction: f64,
    /// Lesson a strong learner jumps to.
    pub mid_course_lesson: u32,
    /// Scale applied when interpolating the starting lesson.
    pub interpolation_factor: f64,
    /// Length of the school-year lesson sequence.
    pub school_year_lessons: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            mastery_threshold: 0.7,
            advanced_fraction: 0.8,
            intermediate_fraction: 0.5,
            weak_fraction: 0.5,
            mid_course_lesson: 16,
            interpolation_factor: 0.7,
            school_year_lessons: 34,
        }
    }
}

impl CatalogConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        toml::from_str::<CatalogConfig>(content)
            .map_err(|e| CatalogError::from(e).with_context("catalog config"))
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(explicit);
    }

    // Use platform-specific app data directory
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/course-catalog");
            dir.push("catalog.toml");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("course-catalog");
            dir.push("catalog.toml");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/course-catalog");
            dir.push("catalog.toml");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("catalog.toml")
}

fn load_catalog_config_internal() -> CatalogConfig {
    let config_path = get_config_path();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No catalog config file, using defaults");
        return CatalogConfig::default();
    }

    match CatalogConfig::from_path(&config_path) {
        Ok(config) => {
            tracing::info!(path = %config_path.display(), "Loaded catalog config");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Failed to load catalog config, using defaults"
            );
            CatalogConfig::default()
        }
    }
}

lazy_static! {
    static ref CATALOG_CONFIG: CatalogConfig = load_catalog_config_internal();
}

/// Get the cached catalog configuration (loaded once, on first use)
pub fn get_catalog_config() -> &'static CatalogConfig {
    &CATALOG_CONFIG
}
