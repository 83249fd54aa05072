//! Build `AppConfig` from environment variables or any key lookup.

use crate::config::{
    AppConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PUBLICATIONS_PATH,
};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

impl AppConfig {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    /// Unset or blank keys take their defaults; set keys must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_addr: SocketAddr =
            parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;

        let max_connections: u32 = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
        )?;
        if max_connections == 0 {
            return Err(invalid("DB_MAX_CONNECTIONS", "0", "must be at least 1"));
        }

        let max_upload_bytes: usize = parse_or(
            "MAX_UPLOAD_BYTES",
            get("MAX_UPLOAD_BYTES"),
            Some(DEFAULT_MAX_UPLOAD_BYTES),
        )?;
        if max_upload_bytes == 0 {
            return Err(invalid("MAX_UPLOAD_BYTES", "0", "must be at least 1"));
        }

        let publications_path =
            get("PUBLICATIONS_PATH").unwrap_or_else(|| DEFAULT_PUBLICATIONS_PATH.into());
        check_mount_path(&publications_path)?;

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            max_upload_bytes,
            publications_path,
        })
    }
}

/// Mount paths are literal: `:` and `*` would turn segments into route parameters
/// and make `Router::nest` panic.
fn check_mount_path(path: &str) -> Result<(), ConfigError> {
    let reason = if !path.starts_with('/') || path.len() < 2 {
        Some("must start with '/' and name at least one segment")
    } else if path.ends_with('/') {
        Some("must not end with '/'")
    } else if path.contains("//") {
        Some("must not contain empty segments")
    } else if path.contains([':', '*', '{', '}']) || path.chars().any(|c| c.is_whitespace()) {
        Some("must not contain ':', '*', braces or whitespace")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(invalid("PUBLICATIONS_PATH", path, reason)),
        None => Ok(()),
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(s) => s.parse::<T>().map_err(|e| invalid(key, &s, &e.to_string())),
        None => default.ok_or_else(|| invalid(key, "", "no default available")),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
