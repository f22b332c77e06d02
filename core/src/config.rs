use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::repository::file::default_data_dir;
use crate::repository::http::DEFAULT_TIMEOUT_SECS;
use crate::repository::{FileRecordStore, HttpRecordStore, MemoryRecordStore, RecordStore};
use crate::time::RolloverRule;

const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_ROSTER: [&str; 6] = ["Błażej", "Krzysztof", "Magda", "Norbert", "Paulina", "Przemek"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    File {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    Http {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File { path: None }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub roster: Vec<String>,
    pub rollover: RolloverRule,
    pub log_level: String,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            rollover: RolloverRule::default(),
            log_level: "warn".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration. An explicit path must exist; the default
    /// `~/.carpool/config.toml` falls back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = default_data_dir()?.join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Config::default()
                }
            }
        };
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.roster.is_empty() {
            bail!("Roster must name at least one person");
        }
        let mut seen = HashSet::new();
        for person in &self.roster {
            if person.trim().is_empty() {
                bail!("Roster contains an empty name");
            }
            if !seen.insert(person.as_str()) {
                bail!("Roster lists '{}' more than once", person);
            }
        }
        if let StoreConfig::Http { url, .. } = &self.store {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("Store url must be http(s), got '{}'", url));
            }
        }
        Ok(())
    }

    /// Directory for the log file and the default record file.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.store {
            StoreConfig::File { path: Some(p) } => Ok(p
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))),
            _ => default_data_dir(),
        }
    }

    pub fn open_store(&self) -> Result<Box<dyn RecordStore>> {
        let store: Box<dyn RecordStore> = match &self.store {
            StoreConfig::File { path: Some(p) } => Box::new(FileRecordStore::at(p.clone())?),
            StoreConfig::File { path: None } => Box::new(FileRecordStore::new(None)?),
            StoreConfig::Http { url, timeout_secs } => Box::new(HttpRecordStore::new(
                url.clone(),
                Duration::from_secs(*timeout_secs),
            )?),
            StoreConfig::Memory => {
                tracing::warn!("using in-memory store; nothing will be persisted");
                Box::new(MemoryRecordStore::new())
            }
        };
        Ok(store)
    }
}
