//! Client configuration.
//!
//! Loaded from `<config_dir>/threads-sdk/config.toml` with environment
//! overrides:
//!
//! ```toml
//! [client]
//! client_id = "1234"
//! client_secret = "..."
//! redirect_uri = "https://example.com/callback"
//! scope = "threads_basic,threads_content_publish"
//!
//! [endpoints]
//! graph_url = "https://graph.threads.net"
//!
//! [http]
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://threads.net/oauth/authorize";
pub const DEFAULT_GRAPH_URL: &str = "https://graph.threads.net";
pub const DEFAULT_API_VERSION: &str = "v1.0";
pub const DEFAULT_SCOPE: &str = "threads_basic,threads_content_publish";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

/// OAuth application credentials. Immutable once the client is built.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Remote endpoints. Defaults target the public Threads API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    /// Browser authorization page.
    pub authorize_url: String,
    /// Graph host; token endpoints live directly under it.
    pub graph_url: String,
    /// Version segment for content endpoints (`{graph_url}/{api_version}/...`).
    pub api_version: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints with every Graph call routed to `graph_url`.
    pub fn with_graph_url(graph_url: impl Into<String>) -> Self {
        Self {
            graph_url: graph_url.into(),
            ..Self::default()
        }
    }
}

/// Transport settings. Unset values inherit reqwest's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl HttpSettings {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub endpoints: Endpoints,
    pub http: HttpSettings,
}

impl Config {
    /// Default config file location.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("threads-sdk").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".threads-sdk/config.toml"))
    }

    /// Load the default config file (if present) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::read(&path)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load an explicit config file and apply environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::read(path.as_ref())?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override settings from `THREADS_*` variables. Empty values are ignored.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        let overrides: [(&str, &mut String); 5] = [
            ("THREADS_CLIENT_ID", &mut self.client.client_id),
            ("THREADS_CLIENT_SECRET", &mut self.client.client_secret),
            ("THREADS_REDIRECT_URI", &mut self.client.redirect_uri),
            ("THREADS_SCOPE", &mut self.client.scope),
            ("THREADS_GRAPH_URL", &mut self.endpoints.graph_url),
        ];
        for (key, slot) in overrides {
            if let Some(value) = get(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
    }

    /// Check that every client credential is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("client_id", &self.client.client_id),
            ("client_secret", &self.client.client_secret),
            ("redirect_uri", &self.client.redirect_uri),
            ("scope", &self.client.scope),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name));
            }
        }
        Ok(())
    }
}
