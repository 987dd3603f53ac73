use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// One year.
const MAX_ACCESS_TOKEN_TTL_SECONDS: i64 = 31_536_000;
/// Ten years.
const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 3_650;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub platform: Platform,
}

/// Deployment platform. Destructive maintenance endpoints are always routed
/// but answer 405 Method Not Allowed unless the platform is `Dev`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Dev,
    Production,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_days: i64,
}

/// Argon2id cost parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8080)?
            .set_default("server.platform", "production")?
            .set_default("jwt.issuer", auth::jwt::DEFAULT_ISSUER)?
            .set_default("jwt.access_token_ttl_seconds", 900)?
            .set_default("jwt.refresh_token_ttl_days", 60)?
            .set_default("password.memory_cost_kib", 19456)?
            .set_default("password.time_cost", 2)?
            .set_default("password.parallelism", 1)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if !(1..=MAX_ACCESS_TOKEN_TTL_SECONDS).contains(&self.jwt.access_token_ttl_seconds) {
            return Err(ConfigError::Message(format!(
                "jwt.access_token_ttl_seconds must be between 1 and {}",
                MAX_ACCESS_TOKEN_TTL_SECONDS
            )));
        }
        if !(1..=MAX_REFRESH_TOKEN_TTL_DAYS).contains(&self.jwt.refresh_token_ttl_days) {
            return Err(ConfigError::Message(format!(
                "jwt.refresh_token_ttl_days must be between 1 and {}",
                MAX_REFRESH_TOKEN_TTL_DAYS
            )));
        }
        Ok(())
    }
}
