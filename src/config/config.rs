use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::app_paths::AppPaths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: DebugConfig,
    pub debounce: DebounceConfig,
    pub process: ProcessConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Debug classifications to print, e.g. ["tss", "files"] or ["all"]
    pub classifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Delay before a debounced call fires
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Node executable used to run the language service
    pub node: String,

    /// Plugin package directory; derived from the binary location when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_dir: Option<PathBuf>,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            package_dir: None,
        }
    }
}

impl ProcessConfig {
    pub fn package_dir(&self) -> Result<PathBuf> {
        match &self.package_dir {
            Some(dir) => Ok(dir.clone()),
            None => AppPaths::package_dir(),
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(target: "config", "Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        AppPaths::config_file()
    }

    /// Push settings into the process-wide state they control
    pub fn apply(&self) {
        crate::debug::set_print_classifications(&self.debug.classifications);
    }

    /// Commented default config
    pub fn create_default_with_comments() -> String {
        r#"# T3S configuration
# Location: ~/.config/t3s/config.toml (Linux)
#           %APPDATA%\t3s\config.toml (Windows)

[debug]
# Debug output to print: all, tss, tss+, tss++, command, command+,
# adapter, adapter+, files
classifications = []

[debounce]
# Delay before error checks and completions fire after typing
delay_ms = 300

[process]
# Node executable running bin/tss.js
node = "node"
# package_dir = "/path/to/T3S"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.debug.classifications.is_empty());
        assert_eq!(config.debounce.delay(), Duration::from_millis(300));
        assert_eq!(config.process.node, "node");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[debug]\nclassifications = [\"tss\"]\n").unwrap();
        assert_eq!(config.debug.classifications, vec!["tss".to_string()]);
        assert_eq!(config.debounce.delay_ms, 300);
    }

    #[test]
    fn test_commented_default_parses() {
        let config: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.debounce.delay_ms = 150;
        config.process.package_dir = Some(PathBuf::from("/opt/t3s"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.process.package_dir().unwrap(),
            PathBuf::from("/opt/t3s")
        );
    }
}
