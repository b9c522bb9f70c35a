/// Skill configuration
use crate::error::{Result, SkillError};
use serde::{Deserialize, Serialize};
use smarthome_api_client::ApiConfig;
use std::time::Duration;

/// Optional config file, looked up in the working directory
const CONFIG_FILE: &str = "alexa-skill.toml";

/// Variable the backend URL was always read from, e.g. "https://myserver.com:50000/"
const LEGACY_API_URL_VAR: &str = "API_URL";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillConfig {
    #[serde(default = "default_backend")]
    pub backend: BackendSettings,

    #[serde(default = "default_server")]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub api_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl SkillConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Override with environment variables (e.g. SKILL_BACKEND__API_URL)
            .add_source(
                config::Environment::with_prefix("SKILL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("backend.api_url", std::env::var(LEGACY_API_URL_VAR).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, logging a failure and falling back to defaults.
    ///
    /// Used for single invocations, where a broken config must end like any
    /// other failed invocation: logged, with no response written.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            Self::default()
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.backend.api_url.trim();

        if url.is_empty() {
            return Err(SkillError::Config(
                "Backend URL is required (set API_URL or SKILL_BACKEND__API_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SkillError::Config(format!(
                "Backend URL must start with http:// or https://, got {:?}",
                url
            )));
        }

        Ok(())
    }

    /// Settings for the backend client
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.backend.api_url.clone())
            .with_request_timeout(Duration::from_secs(self.backend.request_timeout_secs))
    }
}

// Default values
fn default_backend() -> BackendSettings {
    BackendSettings {
        api_url: String::new(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            server: default_server(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(toml: &str) -> SkillConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SkillConfig::default();

        assert!(config.backend.api_url.is_empty());
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [backend]
            api_url = "https://myserver.com:50000/"
            "#,
        );

        assert_eq!(config.backend.api_url, "https://myserver.com:50000/");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_full_file() {
        let config = from_toml(
            r#"
            [backend]
            api_url = "http://localhost:50000"
            request_timeout_secs = 5

            [server]
            host = "127.0.0.1"
            port = 9000
            "#,
        );

        assert_eq!(config.api_config().request_timeout, Duration::from_secs(5));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_validate() {
        let mut config = SkillConfig::default();
        assert!(matches!(config.validate(), Err(SkillError::Config(_))));

        config.backend.api_url = "myserver.com".to_string();
        assert!(config.validate().is_err());

        config.backend.api_url = "https://myserver.com:50000/".to_string();
        assert!(config.validate().is_ok());
    }

    /// Environment is process-wide, so every override case runs in this one test
    #[test]
    fn test_load_environment_overrides() {
        std::env::remove_var(LEGACY_API_URL_VAR);
        std::env::set_var("SKILL_BACKEND__API_URL", "http://prefixed.example:50000/");
        std::env::set_var("SKILL_SERVER__PORT", "9090");

        let config = SkillConfig::load().unwrap();
        assert_eq!(config.backend.api_url, "http://prefixed.example:50000/");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.server.port, 9090);

        std::env::set_var(LEGACY_API_URL_VAR, "https://legacy.example:50000/");

        let config = SkillConfig::load().unwrap();
        assert_eq!(config.backend.api_url, "https://legacy.example:50000/");
        assert_eq!(config.server.port, 9090);

        std::env::set_var("SKILL_SERVER__PORT", "not-a-port");

        assert!(SkillConfig::load().is_err());
        let config = SkillConfig::load_or_default();
        assert!(config.backend.api_url.is_empty());
        assert_eq!(config.server.port, 8080);

        std::env::remove_var(LEGACY_API_URL_VAR);
        std::env::remove_var("SKILL_BACKEND__API_URL");
        std::env::remove_var("SKILL_SERVER__PORT");
    }
}
