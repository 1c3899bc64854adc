use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PgpsealConfig {
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub armor: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist. The default path is optional; when it is
/// missing the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<PgpsealConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = match default_config_path() {
        Ok(path) => path,
        Err(_) => return Ok(PgpsealConfig::default()),
    };
    if !path.exists() {
        return Ok(PgpsealConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<PgpsealConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<PgpsealConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("pgpseal"));
        }
    }
    Ok(home_dir()?.join(".config").join("pgpseal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
