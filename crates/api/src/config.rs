//! Process settings read from environment variables.
//!
//! Nothing security-relevant has a literal fallback: `SECRET_KEY` must be
//! supplied by the deployment.

use std::path::PathBuf;

use chrono::Duration;
use thiserror::Error;

use gatehouse_auth::{AuthConfig, SecretKey, SigningAlgorithm};
use gatehouse_observability::LogFormat;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5700;
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub auth: AuthConfig,
    pub host: String,
    pub port: u16,
    /// Normalized route prefix: empty (mount at root) or `/segment[/...]`
    /// without a trailing slash.
    pub api_prefix: String,
    pub users_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Defaults for everything except the auth config.
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            users_file: None,
            log_format: LogFormat::default(),
        }
    }

    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment in
    /// production, a map in tests). Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = get("SECRET_KEY").ok_or(SettingsError::Missing("SECRET_KEY"))?;
        let secret = SecretKey::new(secret).map_err(|e| SettingsError::invalid("SECRET_KEY", e))?;
        let mut auth = AuthConfig::new(secret);

        if let Some(alg) = get("ALGORITHM") {
            let alg: SigningAlgorithm = alg.parse().map_err(|e| SettingsError::invalid("ALGORITHM", e))?;
            auth = auth.with_algorithm(alg);
        }

        if let Some(minutes) = get("ACCESS_TOKEN_EXPIRE_MINUTES") {
            let minutes: u32 = minutes
                .trim()
                .parse()
                .map_err(|e| SettingsError::invalid("ACCESS_TOKEN_EXPIRE_MINUTES", e))?;
            auth = auth
                .with_access_token_ttl(Duration::minutes(i64::from(minutes)))
                .map_err(|e| SettingsError::invalid("ACCESS_TOKEN_EXPIRE_MINUTES", e))?;
        }

        if let Some(cost) = get("BCRYPT_COST") {
            let cost: u32 = cost
                .trim()
                .parse()
                .map_err(|e| SettingsError::invalid("BCRYPT_COST", e))?;
            auth = auth
                .with_bcrypt_cost(cost)
                .map_err(|e| SettingsError::invalid("BCRYPT_COST", e))?;
        }

        let mut settings = Self::new(auth);

        if let Some(host) = get("WEBSERVER_HOST") {
            settings.host = host.trim().to_string();
        }
        if let Some(port) = get("WEBSERVER_PORT") {
            settings.port = port
                .trim()
                .parse()
                .map_err(|e| SettingsError::invalid("WEBSERVER_PORT", e))?;
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            settings.api_prefix = normalize_prefix(&prefix);
        }
        settings.users_file = get("USERS_FILE").map(PathBuf::from);
        if let Some(format) = get("LOG_FORMAT") {
            settings.log_format = format.parse().map_err(|e| SettingsError::invalid("LOG_FORMAT", e))?;
        }

        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
