#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{DEFAULT_JOKE_ENDPOINT, DEFAULT_USER_AGENT};
use crate::core::csrf::DEFAULT_CSRF_COOKIE;
use crate::core::ConfigProvider;
use crate::utils::error::{JokeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Fully resolved settings, after the TOML file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub joke_endpoint: String,
    pub explain_url: Option<String>,
    pub base_url: Option<String>,
    pub cookies: Option<String>,
    pub csrf_cookie_name: String,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            joke_endpoint: DEFAULT_JOKE_ENDPOINT.to_string(),
            explain_url: None,
            base_url: None,
            cookies: None,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn joke_endpoint(&self) -> &str {
        &self.joke_endpoint
    }

    fn explain_url(&self) -> Option<&str> {
        self.explain_url.as_deref()
    }

    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn cookies(&self) -> Option<&str> {
        self.cookies.as_deref()
    }

    fn csrf_cookie_name(&self) -> &str {
        &self.csrf_cookie_name
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("joke_endpoint", &self.joke_endpoint)?;

        let explain_url = validation::validate_required_field("explain_url", &self.explain_url)?;
        validation::validate_endpoint("explain_url", explain_url, self.base_url.as_deref())?;

        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }

        validation::validate_cookie_name("csrf_cookie_name", &self.csrf_cookie_name)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;

        if self.timeout_seconds == Some(0) {
            return Err(JokeError::InvalidConfigValueError {
                field: "timeout_seconds".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be at least 1 second; omit it to wait indefinitely"
                    .to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            explain_url: Some("http://localhost:8000/".to_string()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.joke_endpoint(), "https://icanhazdadjoke.com");
        assert_eq!(config.csrf_cookie_name(), "csrftoken");
        assert_eq!(config.timeout_seconds(), None);
        assert!(config.user_agent().starts_with("joke-explainer/"));
    }

    #[test]
    fn test_explain_url_is_required() {
        assert!(matches!(
            AppConfig::default().validate(),
            Err(JokeError::MissingConfigError { .. })
        ));
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_relative_explain_url_needs_base() {
        let mut config = AppConfig {
            explain_url: Some("/explain/".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        config.base_url = Some("http://localhost:8000".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AppConfig {
            timeout_seconds: Some(0),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }
}
