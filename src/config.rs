//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Client (`shop`)
//! - `STOREFRONT_API_BASE_URL` - Commerce backend base URL (required)
//! - `STOREFRONT_USER_ID` - Cart owner id (default: demo-user)
//! - `STOREFRONT_NOTIFICATION_TTL_SECS` - Notification lifetime (default: 5)
//!
//! ## Development backend (`serve-backend`)
//! - `STOREFRONT_BACKEND_ADDR` - Bind address (default: 0.0.0.0:8000)

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use crate::notification::NOTIFICATION_TTL_SECS;

pub const API_BASE_URL_VAR: &str = "STOREFRONT_API_BASE_URL";
pub const USER_ID_VAR: &str = "STOREFRONT_USER_ID";
pub const NOTIFICATION_TTL_VAR: &str = "STOREFRONT_NOTIFICATION_TTL_SECS";
pub const BACKEND_ADDR_VAR: &str = "STOREFRONT_BACKEND_ADDR";

pub const DEFAULT_USER_ID: &str = "demo-user";
pub const DEFAULT_BACKEND_ADDR: &str = "0.0.0.0:8000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Commerce backend base URL, without trailing slash
    pub api_base_url: String,
    /// User whose backend cart this session drives
    pub user_id: String,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Values
    /// returned by `overrides` (command-line flags) win over the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or a value is invalid.
    pub fn from_env(overrides: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(layered(overrides, env_var))
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or a value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = non_empty(lookup(API_BASE_URL_VAR))
            .ok_or_else(|| ConfigError::MissingEnvVar(API_BASE_URL_VAR.to_string()))?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                API_BASE_URL_VAR.to_string(),
                "must start with http:// or https://".to_string(),
            ));
        }

        let user_id =
            non_empty(lookup(USER_ID_VAR)).unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        if user_id.contains('/') {
            return Err(ConfigError::InvalidEnvVar(
                USER_ID_VAR.to_string(),
                "must not contain '/'".to_string(),
            ));
        }

        let ttl_secs = match non_empty(lookup(NOTIFICATION_TTL_VAR)) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidEnvVar(
                        NOTIFICATION_TTL_VAR.to_string(),
                        format!("expected a positive number of seconds, got '{raw}'"),
                    )
                })?,
            None => NOTIFICATION_TTL_SECS,
        };

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            user_id,
            notification_ttl: Duration::seconds(ttl_secs),
        })
    }
}

/// Development backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Address to bind the HTTP listener to
    pub addr: SocketAddr,
}

impl BackendConfig {
    /// Load configuration from environment variables, `overrides` first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the bind address does not parse.
    pub fn from_env(overrides: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(layered(overrides, env_var))
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the bind address does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = non_empty(lookup(BACKEND_ADDR_VAR))
            .unwrap_or_else(|| DEFAULT_BACKEND_ADDR.to_string());
        let addr = raw
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar(BACKEND_ADDR_VAR.to_string(), format!("{e}")))?;
        Ok(Self { addr })
    }
}

fn load_dotenv() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// A lookup that asks `first` and falls back to `then`
fn layered(
    first: impl Fn(&str) -> Option<String>,
    then: impl Fn(&str) -> Option<String>,
) -> impl Fn(&str) -> Option<String> {
    move |key: &str| first(key).or_else(|| then(key))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
