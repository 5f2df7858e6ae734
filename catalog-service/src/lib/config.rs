use std::env;

use auth::AuthSettings;
use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection string; in-memory storage when absent
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_seconds: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    /// Argon2 iteration count
    pub hash_cost: u32,
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

        let configuration = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 3000)?
            .set_default("jwt.expires_in_seconds", 3600)?
            .set_default("password.hash_cost", 3)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must be set".to_string()));
        }
        if self.jwt.expires_in_seconds <= 0 {
            return Err(ConfigError::Message(
                "jwt.expires_in_seconds must be positive".to_string(),
            ));
        }
        if self.password.hash_cost == 0 {
            return Err(ConfigError::Message(
                "password.hash_cost must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings::new(
            self.jwt.secret.as_bytes(),
            self.jwt.expires_in_seconds,
            self.password.hash_cost,
        )
    }
}
