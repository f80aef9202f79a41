// src/config.rs

use std::{env, fmt, net::SocketAddr, str::FromStr};

use dotenvy::dotenv;

/// Database backends the service knows how to migrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detects the backend from the scheme of a connection URL.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Backend::Sqlite)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub listen_addr: SocketAddr,
    pub questions_per_page: i64,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub seed_default_categories: bool,
    pub rust_log: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        if Backend::from_url(&database_url).is_none() {
            return Err(ConfigError::Invalid {
                key: "DATABASE_URL",
                value: database_url,
            });
        }

        let database_max_connections =
            pool_size_for(&database_url, parse_var("DATABASE_MAX_CONNECTIONS", 5)?);
        let listen_addr = parse_var("LISTEN_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)))?;

        let questions_per_page: i64 = parse_var("QUESTIONS_PER_PAGE", 10)?;
        if questions_per_page < 1 {
            return Err(ConfigError::Invalid {
                key: "QUESTIONS_PER_PAGE",
                value: questions_per_page.to_string(),
            });
        }

        let allowed_origins = split_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
        let seed_default_categories = parse_var("SEED_DEFAULT_CATEGORIES", false)?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            questions_per_page,
            allowed_origins,
            seed_default_categories,
            rust_log,
        })
    }

    pub fn backend(&self) -> Backend {
        // from_env rejects unknown schemes, configs built by hand default to Postgres.
        Backend::from_url(&self.database_url).unwrap_or(Backend::Postgres)
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        _ => Ok(default),
    }
}

/// Every connection to an in-memory SQLite database opens a fresh, empty one,
/// so such a pool must hold exactly one connection.
fn pool_size_for(database_url: &str, requested: u32) -> u32 {
    let in_memory = database_url.starts_with("sqlite:")
        && (database_url.contains(":memory:") || database_url.contains("mode=memory"));
    if in_memory { 1 } else { requested }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_is_detected_from_scheme() {
        assert_eq!(
            Backend::from_url("postgres://postgres@localhost/trivia"),
            Some(Backend::Postgres)
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/trivia"),
            Some(Backend::Postgres)
        );
        assert_eq!(Backend::from_url("sqlite::memory:"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("sqlite://trivia.db"), Some(Backend::Sqlite));
        assert_eq!(Backend::from_url("mysql://localhost/trivia"), None);
    }

    #[test]
    fn in_memory_sqlite_pool_is_pinned_to_one_connection() {
        assert_eq!(pool_size_for("sqlite::memory:", 5), 1);
        assert_eq!(pool_size_for("sqlite://trivia.db?mode=memory", 8), 1);
        assert_eq!(pool_size_for("sqlite://trivia.db", 5), 5);
        assert_eq!(pool_size_for("postgres://localhost/trivia", 5), 5);
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = split_origins(" http://localhost:3000, ,http://127.0.0.1:3000 ");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert!(split_origins("").is_empty());
    }
}
