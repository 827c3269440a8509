use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// chrono format string shared by class-window and booking dates.
    pub date_format: String,
    /// Optional prefix for the /class and /booking routes, e.g. "/api/v1".
    pub base_route: String,
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP"))
            .set_default("date_format", "%Y-%m-%d")?
            .set_default("base_route", "")?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_defaults() {
        unsafe {
            std::env::remove_var("APP_PORT");
            std::env::remove_var("APP_DATE_FORMAT");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.base_route, "");
        assert_eq!(settings.port, 8080);
        assert!(!settings.debug);
        assert!(settings.enable_swagger);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var("APP_PORT", "9091");
            std::env::set_var("APP_DATE_FORMAT", "%d/%m/%Y");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.port, 9091);
        assert_eq!(settings.date_format, "%d/%m/%Y");
        unsafe {
            std::env::remove_var("APP_PORT");
            std::env::remove_var("APP_DATE_FORMAT");
        }
    }
}
