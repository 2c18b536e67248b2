use std::env;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 3034;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3033";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `STOCKPULSE_CONFIG` (default `config.toml`) and is
    /// skipped when missing. Environment variables use the `STOCKPULSE` prefix with
    /// `__` between section and key, e.g. `STOCKPULSE_SERVER__PORT=8080`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("STOCKPULSE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("STOCKPULSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a single file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        Self::finish(settings.try_deserialize()?)
    }

    fn finish(mut config: Self) -> Result<Self> {
        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail once the server is running.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::invalid_config("server.host must be specified"));
        }

        self.cors.origin_header()?;
        Ok(())
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Cross-origin policy. Exactly one browser origin may call the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub allowed_origin: String,
}

impl CorsSection {
    /// The configured origin as a header value, checked to be a bare
    /// `http(s)://host[:port]` origin.
    pub fn origin_header(&self) -> Result<HeaderValue> {
        let origin = self.allowed_origin.trim();

        let rest = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .ok_or_else(|| {
                Error::invalid_config(format!(
                    "cors.allowed_origin must start with http:// or https://, got '{}'",
                    origin
                ))
            })?;

        if rest.is_empty() || rest.contains('/') {
            return Err(Error::invalid_config(format!(
                "cors.allowed_origin must be a bare origin without a path, got '{}'",
                origin
            )));
        }

        HeaderValue::from_str(origin).map_err(|e| {
            Error::invalid_config(format!("cors.allowed_origin '{}': {}", origin, e))
        })
    }
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
