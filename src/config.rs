use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub root: RootConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_days: i64,
}

/// Bootstrap administrator created on `serve` when the email is not taken.
/// Left empty, no account is created.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the
    /// environment, in that order of precedence.
    ///
    /// The file is `config_path` when given, else `CONFIG_PATH`, else
    /// `config/default.toml` if it exists. Environment variables use the
    /// `AKKOR__SECTION__KEY` form, and the bare `DATABASE_URL` and
    /// `JWT_SECRET` variables win over everything.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:akkor.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.issuer", "akkor")?
            .set_default("jwt.audience", "akkor-web")?
            .set_default("jwt.expiration_days", 7)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let path = config_path.or_else(|| env::var("CONFIG_PATH").ok());

        match path {
            Some(path) => {
                builder = builder.add_source(File::with_name(&path).required(true));
            }
            None if std::path::Path::new("config/default.toml").exists() => {
                builder = builder.add_source(File::with_name("config/default").required(false));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix("AKKOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }

        if let Ok(secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", secret)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }

        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }

        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        Ok(())
    }
}
