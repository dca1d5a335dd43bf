use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Cannot determine config directory"))?
            .join("t3s");

        fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Plugin package directory: the parent of the directory holding the
    /// running binary (`<package>/bin/t3s-utils` → `<package>`).
    pub fn package_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()?.canonicalize()?;
        exe.parent()
            .and_then(|bin| bin.parent())
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("Cannot determine package directory from {}", exe.display()))
    }
}
