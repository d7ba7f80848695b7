use std::net::SocketAddr;

use hms_db::DbConfig;

/// Log output format selected by `HMS_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub bootstrap_schema: bool,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset variables take defaults;
    /// set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("HMS_DB").unwrap_or_else(|| "hospital.db".to_string());
        if url.trim().is_empty() {
            return Err(invalid("HMS_DB", url, "a non-empty path or sqlite URL"));
        }

        let max_connections = match lookup("HMS_DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(invalid("HMS_DB_MAX_CONNECTIONS", v, "an integer >= 1")),
            },
            None => 1,
        };

        let bootstrap_schema = match lookup("HMS_BOOTSTRAP_SCHEMA") {
            Some(v) => parse_bool(&v)
                .ok_or_else(|| invalid("HMS_BOOTSTRAP_SCHEMA", v, "true/false/1/0"))?,
            None => true,
        };

        let bind = lookup("HMS_BIND").unwrap_or_else(|| "0.0.0.0:5000".to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| invalid("HMS_BIND", bind.clone(), "a socket address such as 0.0.0.0:5000"))?;

        let log_format = match lookup("HMS_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(invalid("HMS_LOG_FORMAT", other.to_string(), "text or json")),
        };

        Ok(Self {
            db: DbConfig {
                url,
                max_connections,
            },
            bootstrap_schema,
            bind_addr,
            log_format,
        })
    }
}

fn invalid(var: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value,
        expected,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
