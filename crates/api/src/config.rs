use std::str::FromStr;

use outreach_ai::AiConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// External text-generation API settings.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    /// | `DATABASE_URL`         | required                   |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    ///
    /// See [`AiConfig::from_env`] for the `OPENAI_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 5000)?;

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 60)?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            ai: AiConfig::from_env(),
        })
    }
}

/// Read and parse an env var, using `default` when it is unset.
fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:3000 ,, https://app.example.com "),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn unset_var_uses_default() {
        let port: u16 = parse_var("OUTREACH_TEST_SURELY_UNSET_VAR", 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL must be set"
        );
        let err = ConfigError::Invalid {
            var: "PORT",
            value: "eighty".into(),
        };
        assert_eq!(err.to_string(), "PORT has an invalid value 'eighty'");
    }
}
