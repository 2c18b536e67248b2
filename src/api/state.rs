//! API server state

use axum::http::HeaderValue;

use crate::config::AppConfig;
use crate::error::Result;

/// API server state
#[derive(Clone, Debug)]
pub struct AppState {
    /// The single browser origin allowed to call the API
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Build state from validated configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            allowed_origin: config.cors.origin_header()?,
        })
    }
}
