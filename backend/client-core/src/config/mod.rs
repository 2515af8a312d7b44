pub mod env;

use crate::error::config::ConfigError;
use crate::render::TrustPolicy;
use crate::{APP_NAME, SOLVE_ENDPOINT, SOLVER_SERVER_BASE_URL};

use common::ErrorLocation;

use models::{TypesetConfig, TypesetConfigBuilder};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Environment variable that overrides `server.base_url`.
pub const SERVER_URL_ENV: &str = "CALCULUS_ASSISTANT_SERVER_URL";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_solve_path")]
    pub solve_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            solve_path: default_solve_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub trust_policy: TrustPolicy,
    /// Run the typesetting engine over markup after each successful solve.
    #[serde(default = "default_typeset")]
    pub typeset: bool,
    #[serde(default)]
    pub delimiters: TypesetConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            trust_policy: TrustPolicy::default(),
            typeset: default_typeset(),
            delimiters: TypesetConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    SOLVER_SERVER_BASE_URL.to_string()
}
fn default_solve_path() -> String {
    SOLVE_ENDPOINT.to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_typeset() -> bool {
    true
}

// ============================================
// IMPLEMENTATION
// ============================================

/// Platform config directory for the assistant, e.g. `~/.config/calculus-assistant`.
#[track_caller]
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("Platform has no config directory"),
        })
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename so a crash never leaves a half-written file.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Apply environment overrides on top of the loaded values.
    ///
    /// Call after [`env::load_dotenv`] so `.env` entries are visible. An empty
    /// variable is ignored.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                warn!("{SERVER_URL_ENV} is set but empty, ignoring");
            } else {
                info!("Using {SERVER_URL_ENV} override: {url}");
                self.server.base_url = url.to_string();
            }
        }

        self.validate()
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let url = &self.server.base_url;
        let parsed = Url::parse(url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid URL format: {url} ({e})"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", url),
            });
        }

        if self.server.solve_path.trim_matches('/').is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "solve_path cannot be empty".to_string(),
            });
        }

        let timeout = self.server.request_timeout_secs;
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid request timeout: {timeout}s (must be 1-{MAX_REQUEST_TIMEOUT_SECS})"
                ),
            });
        }

        self.typeset_config()?;

        Ok(())
    }

    /// The delimiter config, re-validated through [`TypesetConfigBuilder`].
    pub fn typeset_config(&self) -> Result<TypesetConfig, ConfigError> {
        let delimiters = &self.render.delimiters;
        let mut builder = TypesetConfigBuilder::default()
            .with_process_escapes(delimiters.process_escapes)
            .with_show_messages(delimiters.show_messages);

        for pair in &delimiters.inline_math {
            builder = builder.with_inline(pair.open.clone(), pair.close.clone());
        }
        for pair in &delimiters.display_math {
            builder = builder.with_display(pair.open.clone(), pair.close.clone());
        }

        builder.build().map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })
    }
}
