use serde::Deserialize;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// File path, `sqlite:` URL, or `:memory:`
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// ANSI colours: `auto`, `always` or `never`
    pub style: String,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Try to load from .env file before reading overrides
        let _ = dotenv::dotenv();

        let mut builder = config::Config::builder()
            .set_default("database.url", "./applications.db")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.style", "auto")?
            .add_source(config::File::with_name("appregistry").required(false));

        // Load from environment variables
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        if let Ok(host) = env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port.parse::<u16>().unwrap_or(8000))?;
        }

        if let Ok(log_level) = env::var("RUST_LOG") {
            builder = builder.set_override("logging.level", log_level)?;
        }

        if let Ok(log_style) = env::var("RUST_LOG_STYLE") {
            builder = builder.set_override("logging.style", log_style)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl LoggingConfig {
    pub fn ansi_enabled(&self) -> bool {
        match self.style.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Clear environment variables for this test
        env::remove_var("DATABASE_URL");
        env::remove_var("HOST");
        env::remove_var("PORT");

        let config = Config::from_env();
        assert!(config.is_ok());

        let config = config.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "./applications.db");
        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_log_style() {
        let style = |s: &str| LoggingConfig {
            level: "info".to_string(),
            style: s.to_string(),
        };

        assert!(style("always").ansi_enabled());
        assert!(style("ALWAYS").ansi_enabled());
        assert!(!style("never").ansi_enabled());
    }
}
