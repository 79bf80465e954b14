//! Server settings read from the environment (after `.env` is loaded).

use std::env;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of minutes, got {value:?}")]
    InvalidMinutes { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Marks session cookies `Secure`
    pub production: bool,
    pub log_filter: String,
    pub session_idle_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            production: false,
            log_filter: DEFAULT_LOG_FILTER.into(),
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let session_idle_minutes = match lookup("SESSION_IDLE_MINUTES") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                _ => {
                    return Err(ConfigError::InvalidMinutes {
                        name: "SESSION_IDLE_MINUTES",
                        value,
                    })
                }
            },
            None => defaults.session_idle_minutes,
        };

        Ok(Self {
            production: lookup("PRODUCTION").is_some(),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            session_idle_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), Ok(ServerConfig::default()));
    }

    #[test]
    fn reads_every_setting() {
        let cfg = config(&[
            ("PRODUCTION", "1"),
            ("RUST_LOG", "mlshelf=debug"),
            ("SESSION_IDLE_MINUTES", "15"),
        ])
        .unwrap();
        assert_eq!(
            cfg,
            ServerConfig {
                production: true,
                log_filter: "mlshelf=debug".into(),
                session_idle_minutes: 15,
            }
        );
    }

    #[test]
    fn rejects_non_positive_idle_time() {
        for bad in ["0", "-5", "soon"] {
            assert_eq!(
                config(&[("SESSION_IDLE_MINUTES", bad)]),
                Err(ConfigError::InvalidMinutes {
                    name: "SESSION_IDLE_MINUTES",
                    value: bad.to_string(),
                })
            );
        }
    }
}
