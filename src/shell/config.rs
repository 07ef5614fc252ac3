use std::path::PathBuf;

use thiserror::Error;

use crate::modules::activities::core::changes::CapacityPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity: CapacityPolicy,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("ACTIVITIES_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "ACTIVITIES_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let capacity = match lookup("ACTIVITIES_CAPACITY_POLICY") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "advisory" => CapacityPolicy::Advisory,
                "enforced" => CapacityPolicy::Enforced,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ACTIVITIES_CAPACITY_POLICY",
                        value,
                    });
                }
            },
            None => CapacityPolicy::default(),
        };

        Ok(Self {
            host: lookup("ACTIVITIES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: lookup("ACTIVITIES_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            capacity,
            log_filter: lookup("ACTIVITIES_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
