//! Application configuration
//!
//! All configuration arrives through environment variables; a .env file in
//! the working directory is folded in when present. Every field has a
//! default so a bare `cargo run` works.

use std::env;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Top-level configuration, grouped by concern
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub cors: CorsConfig,
    pub engagement: EngagementSettings,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    /// Returns an error when a variable is present but holds an unparseable
    /// value; absent variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: string_var("APP_NAME", "agora"),
                env: parse_var("APP_ENV")?.unwrap_or_default(),
            },
            api: ServerConfig {
                host: string_var("API_HOST", "127.0.0.1"),
                port: parse_var("API_PORT")?.unwrap_or(DEFAULT_PORT),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            engagement: EngagementSettings {
                count_deletes_toward_badges: parse_var("COUNT_DELETES_TOWARD_BADGES")?
                    .unwrap_or(true),
                reaction_user_page_limit: parse_var("REACTION_USER_PAGE_LIMIT")?
                    .unwrap_or(DEFAULT_PAGE_LIMIT),
            },
        })
    }
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(UnknownEnvironment),
        }
    }
}

/// Error for an unrecognized environment name
#[derive(Debug, Clone, Copy)]
pub struct UnknownEnvironment;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// host:port string for the TCP bind
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Engagement engine policy knobs
#[derive(Debug, Clone)]
pub struct EngagementSettings {
    /// Whether delete/unlike actions still advance badge counters. The
    /// platform has historically counted them; flipping this changes
    /// observable badge-award timing.
    pub count_deletes_toward_badges: bool,
    /// Page-size cap for "who reacted" listings
    pub reaction_user_page_limit: i64,
}

impl Default for EngagementSettings {
    fn default() -> Self {
        Self {
            count_deletes_toward_badges: true,
            reaction_user_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn string_var(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional variable, erroring on a present-but-invalid value
/// instead of silently falling back
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_classifiers() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Development.is_development());
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(server.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_engagement_defaults() {
        let settings = EngagementSettings::default();
        assert!(settings.count_deletes_toward_badges);
        assert_eq!(settings.reaction_user_page_limit, 100);
    }
}
