//! # cleanarch Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Tells the commands where the project lives, which settings and build scripts
//! to edit, which settings dialect to write, and under which directories new
//! modules are placed.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.cleanarch.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/cleanarch/config.toml`
//! 3. Default values defined in the code
//!
//! After merging, `~` in the project root is expanded and the result validated.
//!
//! ```toml
//! [project]
//! root = "~/code/my-service"
//! settings_file = "settings.gradle.kts"
//! build_file = "applications/app-service/build.gradle"
//! dialect = "kotlin"
//!
//! [modules]
//! entry_points = "infrastructure/entry-points"
//! driven_adapters = "infrastructure/driven-adapters"
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use crate::core::gradle::settings::ModuleDialect;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
}

/// Location of the Gradle project and its scripts.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root directory (can use ~). Will be expanded.
    #[serde(default = "default_root")]
    pub root: String,
    /// Settings script, relative to `root`.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// Build script edited by `dependency` and `configuration` commands, relative to `root`.
    #[serde(default = "default_build_file")]
    pub build_file: String,
    /// Settings dialect. Inferred from `settings_file` when absent.
    #[serde(default)]
    pub dialect: Option<ModuleDialect>,
}

/// Base directories new modules are placed under.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    #[serde(default = "default_entry_points")]
    pub entry_points: String,
    #[serde(default = "default_driven_adapters")]
    pub driven_adapters: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            settings_file: default_settings_file(),
            build_file: default_build_file(),
            dialect: None,
        }
    }
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            entry_points: default_entry_points(),
            driven_adapters: default_driven_adapters(),
        }
    }
}

impl Config {
    /// Absolute or root-relative path of the settings script.
    pub fn settings_path(&self) -> PathBuf {
        Path::new(&self.project.root).join(&self.project.settings_file)
    }

    /// Absolute or root-relative path of the build script.
    pub fn build_path(&self) -> PathBuf {
        Path::new(&self.project.root).join(&self.project.build_file)
    }

    /// Configured dialect, falling back to inference from the settings file name.
    pub fn dialect(&self) -> ModuleDialect {
        self.project
            .dialect
            .unwrap_or_else(|| ModuleDialect::from_path(Path::new(&self.project.settings_file)))
    }
}

fn default_root() -> String {
    ".".to_string()
}
fn default_settings_file() -> String {
    "settings.gradle".to_string()
}
fn default_build_file() -> String {
    "build.gradle".to_string()
}
fn default_entry_points() -> String {
    "infrastructure/entry-points".to_string()
}
fn default_driven_adapters() -> String {
    "infrastructure/driven-adapters".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".cleanarch.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "cleanarch", "cleanarch") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    fn pick(project: String, user: String, default: String) -> String {
        if project != default {
            project
        } else {
            user
        }
    }
    Config {
        project: ProjectConfig {
            root: pick(project_cfg.project.root, user.project.root, default_root()),
            settings_file: pick(
                project_cfg.project.settings_file,
                user.project.settings_file,
                default_settings_file(),
            ),
            build_file: pick(
                project_cfg.project.build_file,
                user.project.build_file,
                default_build_file(),
            ),
            dialect: project_cfg.project.dialect.or(user.project.dialect),
        },
        modules: ModulesConfig {
            entry_points: pick(
                project_cfg.modules.entry_points,
                user.modules.entry_points,
                default_entry_points(),
            ),
            driven_adapters: pick(
                project_cfg.modules.driven_adapters,
                user.modules.driven_adapters,
                default_driven_adapters(),
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.project.root = shellexpand::tilde(&config.project.root).into_owned();
    debug!("Expanded project root: {}", config.project.root);
}

fn validate_config(config: &Config) -> Result<()> {
    let required = [
        ("project.root", &config.project.root),
        ("project.settings_file", &config.project.settings_file),
        ("project.build_file", &config.project.build_file),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "'{key}' must not be empty."
            ))));
        }
    }
    let root = Path::new(&config.project.root);
    if !root.exists() {
        warn!("Configured project root '{}' does not exist.", root.display());
    } else if !root.is_dir() {
        return Err(anyhow!(ScaffoldError::Config(format!(
            "Configured project root '{}' exists but is not a directory.",
            root.display()
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [project]
            root = "~/code/service"
            settings_file = "settings.gradle.kts"

            [modules]
            entry_points = "infra/entry"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.project.root, "~/code/service"); // Not yet expanded
        assert_eq!(config.project.settings_file, "settings.gradle.kts");
        assert_eq!(config.project.build_file, default_build_file());
        assert_eq!(config.project.dialect, None);
        assert_eq!(config.dialect(), ModuleDialect::Kotlin); // Inferred from .kts
        assert_eq!(config.modules.entry_points, "infra/entry");
        assert_eq!(config.modules.driven_adapters, default_driven_adapters());
    }

    #[test]
    fn test_explicit_dialect_wins_over_file_name() {
        let config: Config = toml::from_str(
            r#"
            [project]
            settings_file = "settings.gradle.kts"
            dialect = "groovy"
        "#,
        )
        .unwrap();
        assert_eq!(config.dialect(), ModuleDialect::Groovy);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[project]\nfoo = 1\n");
        assert!(result.is_err());
        let result: std::result::Result<Config, _> =
            toml::from_str("[project]\ndialect = \"scala\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            project: ProjectConfig {
                root: "~/service".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(config.project.root, home_dir.join("service").to_string_lossy());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            project: ProjectConfig {
                build_file: "user.gradle".to_string(),
                dialect: Some(ModuleDialect::Kotlin),
                ..Default::default()
            },
            modules: ModulesConfig {
                entry_points: "user/entry".to_string(),
                ..Default::default()
            },
        };
        let project = Config {
            project: ProjectConfig {
                settings_file: "settings.gradle.kts".to_string(),
                ..Default::default()
            },
            modules: ModulesConfig {
                entry_points: "project/entry".to_string(),
                ..Default::default()
            },
        };
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.project.settings_file, "settings.gradle.kts");
        assert_eq!(merged.project.build_file, "user.gradle");
        assert_eq!(merged.project.dialect, Some(ModuleDialect::Kotlin));
        assert_eq!(merged.modules.entry_points, "project/entry");
        assert_eq!(merged.modules.driven_adapters, default_driven_adapters());
    }

    #[test]
    fn test_merge_without_project_keeps_user() {
        let user = Config {
            project: ProjectConfig {
                root: "/srv/app".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = merge_configs(user, None);
        assert_eq!(merged.project.root, "/srv/app");
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = Config {
            project: ProjectConfig {
                build_file: " ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("project.build_file"));
    }

    #[test]
    fn test_validate_rejects_file_root() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("root.txt");
        fs::write(&file, "")?;
        let config = Config {
            project: ProjectConfig {
                root: file.to_string_lossy().into_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
        Ok(())
    }

    #[test]
    fn test_find_project_config_in_ancestor() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(PROJECT_CONFIG_FILENAME), "")?;
        let nested = dir.path().join("domain/model");
        fs::create_dir_all(&nested)?;
        assert_eq!(
            find_project_config_path(&nested),
            Some(dir.path().join(PROJECT_CONFIG_FILENAME))
        );
        Ok(())
    }

    #[test]
    fn test_find_project_config_stops_at_git() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(PROJECT_CONFIG_FILENAME), "")?;
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join(".git"))?;
        assert_eq!(find_project_config_path(&repo), None);
        Ok(())
    }

    #[test]
    fn test_paths_join_root() {
        let config = Config::default();
        assert_eq!(config.settings_path(), Path::new("./settings.gradle"));
        assert_eq!(config.build_path(), Path::new("./build.gradle"));
    }
}
