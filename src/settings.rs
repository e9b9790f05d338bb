use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use chrono::Duration;

use config::{Config, Environment, File};

use serde::Deserialize;
use serde_aux::prelude::*;

use crate::repo::{FileStore, KeyValueStore, MemoryStore, NullStore};

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub storage: StorageSettings,
    pub composer: ComposerSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        // Get the path to the settings directory
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }
    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            // Include the base settings
            .add_source(File::from(base_path.join("base")).required(true))
            // Include the runtime settings
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // Override/include any settings from environment variables
            // NOTE: Takes the form `APP_<settings category>__<setting name>`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
}

impl ApplicationSettings {
    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

/// Where the newsletter collection is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A JSON file inside `path`
    File,
    /// Process memory, gone on restart
    Memory,
    /// No storage at all
    None,
}

#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    backend: StorageBackend,
    #[serde(default)]
    path: Option<PathBuf>,
}

impl StorageSettings {
    /// Open the configured key-value store
    pub fn store(&self) -> anyhow::Result<Box<dyn KeyValueStore>> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            StorageBackend::File => {
                let path = self
                    .path
                    .clone()
                    .context("storage.path is required for the file backend")?;
                Box::new(FileStore::new(path))
            }
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::None => Box::new(NullStore),
        };
        Ok(store)
    }
}

/// Longest accepted default schedule delay, one year
pub const MAX_SCHEDULE_DELAY_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawComposerSettings")]
pub struct ComposerSettings {
    schedule_delay_hours: i64,
}

#[derive(Deserialize)]
struct RawComposerSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    schedule_delay_hours: i64,
}

impl TryFrom<RawComposerSettings> for ComposerSettings {
    type Error = anyhow::Error;

    fn try_from(raw: RawComposerSettings) -> anyhow::Result<Self> {
        Self::new(raw.schedule_delay_hours)
    }
}

impl ComposerSettings {
    /// The delay must be positive and at most `MAX_SCHEDULE_DELAY_HOURS`
    pub fn new(schedule_delay_hours: i64) -> anyhow::Result<Self> {
        if !(1..=MAX_SCHEDULE_DELAY_HOURS).contains(&schedule_delay_hours) {
            anyhow::bail!(
                "composer.schedule_delay_hours must be between 1 and {}, got {}",
                MAX_SCHEDULE_DELAY_HOURS,
                schedule_delay_hours
            );
        }
        Ok(Self {
            schedule_delay_hours,
        })
    }
    /// How far ahead a newsletter is scheduled when no time is given
    pub fn schedule_delay(&self) -> Duration {
        Duration::hours(self.schedule_delay_hours)
    }
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            schedule_delay_hours: 24,
        }
    }
}
