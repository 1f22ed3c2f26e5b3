use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileConfig {
    pub path: String,
    pub archive_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub max_connections: u32,
    pub log_file: Option<LogFileConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = parse("PORT", required("PORT")?)?;
        let database_url = required("DATABASE_URL")?;
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse("DB_MAX_CONNECTIONS", v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_file = match (lookup("LOG_FILE_PATH"), lookup("LOG_ARCHIVE_PATTERN")) {
            (Some(path), Some(archive_pattern)) => Some(LogFileConfig {
                path,
                archive_pattern,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("LOG_ARCHIVE_PATTERN")),
            (None, Some(_)) => return Err(ConfigError::Missing("LOG_FILE_PATH")),
        };

        Ok(Self {
            port,
            bind_address,
            database_url,
            max_connections,
            log_file,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
