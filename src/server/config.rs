use std::{path::PathBuf, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Public base URL used to build absolute download links.
    pub app_url: Url,

    /// Directory uploaded documents are written beneath.
    pub media_root: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: parse_var("APP_URL", DEFAULT_APP_URL)?,
            media_root: optional_var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_ROOT)),
            max_upload_bytes: match optional_var("MAX_UPLOAD_BYTES") {
                Some(value) => parse_value("MAX_UPLOAD_BYTES", &value)?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = optional_var(name).unwrap_or_else(|| default.to_string());
    parse_value(name, &value)
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_values() {
        let bytes: usize = parse_value("MAX_UPLOAD_BYTES", "1024").unwrap();
        let url: Url = parse_value("APP_URL", "https://academia.example").unwrap();

        assert_eq!(bytes, 1024);
        assert_eq!(url.as_str(), "https://academia.example/");
    }

    #[test]
    fn rejects_malformed_values_naming_the_variable() {
        let result = parse_value::<usize>("MAX_UPLOAD_BYTES", "lots");

        match result {
            Err(ConfigError::InvalidEnvVar { name, .. }) => assert_eq!(name, "MAX_UPLOAD_BYTES"),
            other => panic!("expected InvalidEnvVar, got {:?}", other.map(|_| ())),
        }
    }
}
