use crate::config::AppConfig;
use crate::utils::error::{JokeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section and key is optional; absent keys
/// leave the defaults in place.
///
/// ```toml
/// [joke_source]
/// endpoint = "https://icanhazdadjoke.com"
///
/// [explanation]
/// url = "/explain/"
/// base_url = "http://localhost:8000"
///
/// [csrf]
/// cookie_name = "csrftoken"
/// cookies = "csrftoken=${CSRF_TOKEN}"
///
/// [http]
/// user_agent = "my-client/1.0"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub joke_source: JokeSourceConfig,
    #[serde(default)]
    pub explanation: ExplanationConfig,
    #[serde(default)]
    pub csrf: CsrfConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JokeSourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplanationConfig {
    pub url: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsrfConfig {
    pub cookie_name: Option<String>,
    pub cookies: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JokeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| JokeError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| JokeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.joke_source.endpoint {
            config.joke_endpoint = endpoint.clone();
        }
        if let Some(url) = &self.explanation.url {
            config.explain_url = Some(url.clone());
        }
        if let Some(base) = &self.explanation.base_url {
            config.base_url = Some(base.clone());
        }
        if let Some(name) = &self.csrf.cookie_name {
            config.csrf_cookie_name = name.clone();
        }
        if let Some(cookies) = &self.csrf.cookies {
            config.cookies = Some(cookies.clone());
        }
        if let Some(agent) = &self.http.user_agent {
            config.user_agent = agent.clone();
        }
        if let Some(seconds) = self.http.timeout_seconds {
            config.timeout_seconds = Some(seconds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_file() {
        let toml = r#"
[joke_source]
endpoint = "http://jokes.local/"

[explanation]
url = "/explain/"
base_url = "http://localhost:8000"

[csrf]
cookie_name = "xsrf"
cookies = "xsrf=abc; sessionid=1"

[http]
user_agent = "tester/1.0"
timeout_seconds = 15
"#;
        let file = TomlConfig::from_toml_str(toml).unwrap();
        let mut config = AppConfig::default();
        file.apply_to(&mut config);

        assert_eq!(config.joke_endpoint, "http://jokes.local/");
        assert_eq!(config.explain_url.as_deref(), Some("/explain/"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.csrf_cookie_name, "xsrf");
        assert_eq!(config.cookies.as_deref(), Some("xsrf=abc; sessionid=1"));
        assert_eq!(config.user_agent, "tester/1.0");
        assert_eq!(config.timeout_seconds, Some(15));
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let file = TomlConfig::from_toml_str("").unwrap();
        let mut config = AppConfig::default();
        file.apply_to(&mut config);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("JOKE_EXPLAINER_TEST_TOKEN", "s3cr3t");
        let toml = r#"
[csrf]
cookies = "csrftoken=${JOKE_EXPLAINER_TEST_TOKEN}; other=${JOKE_EXPLAINER_TEST_UNSET}"
"#;
        let file = TomlConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            file.csrf.cookies.as_deref(),
            Some("csrftoken=s3cr3t; other=${JOKE_EXPLAINER_TEST_UNSET}")
        );
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = TomlConfig::from_toml_str("[server]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, JokeError::ConfigParseError { .. }));
    }
}
