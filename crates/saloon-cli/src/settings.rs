//! Layered CLI configuration
//!
//! Built-in defaults, then an optional TOML file, then `SALOON__*`
//! environment variables (`SALOON__DATABASE__PATH=/tmp/s.db`, ...).
//! Command-line flags are applied last by the caller.

use saloon_core::logging_facility::Profile;
use saloon_core::Principal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "saloon.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub identity: Identity,
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    /// SQLite file; parent directories are created on open
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    /// Principal every command runs as
    pub caller: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// `development`, `production` or `test`
    pub profile: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".saloon/store.db"),
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            caller: Principal::ANONYMOUS.to_string(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            profile: "development".to_string(),
        }
    }
}

impl Settings {
    /// Load settings
    ///
    /// An explicit `path` must exist; without one, `saloon.toml` is read
    /// only if present.
    ///
    /// # Errors
    ///
    /// Returns the `config` error for an unreadable file or a bad value.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default(
                "database.path",
                Database::default().path.to_string_lossy().to_string(),
            )?
            .set_default("identity.caller", Identity::default().caller)?
            .set_default("logging.profile", Logging::default().profile)?;

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.to_path_buf()));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        builder = builder.add_source(config::Environment::with_prefix("SALOON").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Apply command-line flags on top of the loaded layers
    pub fn with_overrides(mut self, db: Option<PathBuf>, caller: Option<String>) -> Self {
        if let Some(db) = db {
            self.database.path = db;
        }
        if let Some(caller) = caller {
            self.identity.caller = caller;
        }
        self
    }

    pub fn caller(&self) -> Principal {
        Principal::new(self.identity.caller.clone())
    }

    /// # Errors
    ///
    /// Returns a message naming the unknown profile.
    pub fn logging_profile(&self) -> Result<Profile, String> {
        self.logging.profile.parse()
    }
}
