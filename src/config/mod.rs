//! Configuration management
//!
//! Sources are layered: built-in defaults, then an optional TOML file
//! (`config/ringback.toml`, or the path in `RINGBACK_CONFIG`), then
//! `RINGBACK__SECTION__KEY` environment variables.

use ::config::{ConfigBuilder, ConfigError, Environment, File, FileFormat, FileSourceFile, Source};
use ::config::builder::DefaultState;
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "RINGBACK_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "config/ringback";
const ENV_PREFIX: &str = "RINGBACK";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Route the platform posts inbound calls to
    pub path: String,
    /// Externally visible base URL, used to rebuild the signed URL
    pub public_url: Option<String>,
    /// Account auth token; signature checks are off when unset
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` takes precedence
    pub filter: String,
}

impl Config {
    /// Load configuration from defaults, file and environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::from_sources(Self::config_file(path.as_deref()), Self::environment())
    }

    /// Defaults overlaid with a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Config>()?
            .validated()
    }

    /// An explicit path must exist, the default file is optional
    fn config_file(path: Option<&str>) -> File<FileSourceFile, FileFormat> {
        match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        }
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    fn from_sources<F>(file: F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        Self::defaults()?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize::<Config>()?
            .validated()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(::config::Config::builder().add_source(::config::Config::try_from(&Config::default())?))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.webhook.validate()?;
        Ok(self)
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl WebhookConfig {
    /// Reject values the HTTP router cannot mount
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "webhook.path must start with '/', got {:?}",
                self.path
            )));
        }
        Ok(())
    }

    pub fn signature_checks_enabled(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("path", &self.path)
            .field("public_url", &self.public_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            webhook: WebhookConfig::default(),
            logging: LoggingConfig {
                filter: "ringback=info,tower_http=info".to_string(),
            },
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            path: "/voice/incoming".to_string(),
            public_url: None,
            auth_token: None,
        }
    }
}
