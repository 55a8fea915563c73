//! Configuration management for the registry server.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Relationship enforcement on writes: "strict" or "lenient".
    ///
    /// Strict rejects patient writes that reference a missing doctor and
    /// blocks deletion of a doctor who still has patients.
    #[serde(default = "default_referential_integrity_mode")]
    pub referential_integrity_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting for logs (recommended for production)
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_referential_integrity_mode() -> String {
    "strict".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                cors_origins: default_cors_origins(),
            },
            registry: RegistryConfig {
                referential_integrity_mode: default_referential_integrity_mode(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                json: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment and config files
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            // Start with defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("server.cors_origins", default_cors_origins())?
            .set_default(
                "registry.referential_integrity_mode",
                default_referential_integrity_mode(),
            )?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            // Add config file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            // Uses double underscore (__) to map to nested config structure
            // Example: CLINICA__SERVER__PORT -> config.server.port
            .add_source(
                config::Environment::with_prefix("CLINICA")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".to_string());
        }

        let mode = &self.registry.referential_integrity_mode;
        if crate::services::ReferentialIntegrityMode::parse(mode).is_none() {
            return Err(format!(
                "registry.referential_integrity_mode must be 'strict' or 'lenient', got '{mode}'"
            ));
        }

        Ok(())
    }
}
