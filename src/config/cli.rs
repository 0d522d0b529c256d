use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "joke-explainer")]
#[command(about = "Fetch a random joke and stream an explanation of it", version)]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "JOKE_ENDPOINT", help = "Joke source URL")]
    pub joke_endpoint: Option<String>,

    #[arg(long, env = "JOKE_EXPLAIN_URL", help = "Explanation endpoint (absolute or relative to --base-url)")]
    pub explain_url: Option<String>,

    #[arg(long, env = "JOKE_BASE_URL", help = "Base URL for a relative --explain-url")]
    pub base_url: Option<String>,

    #[arg(long, env = "JOKE_COOKIES", help = "Cookie string, e.g. 'csrftoken=abc; sessionid=xyz'")]
    pub cookies: Option<String>,

    #[arg(long, help = "Name of the cookie holding the CSRF token")]
    pub csrf_cookie_name: Option<String>,

    #[arg(long, help = "User-Agent sent with every request")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Request timeout in seconds (default: none)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Fetch one joke, explain it and exit")]
    pub explain_once: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges defaults, the optional TOML file and command line flags, in
    /// that order of precedence (last wins).
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(endpoint) = &self.joke_endpoint {
            config.joke_endpoint = endpoint.clone();
        }
        if let Some(url) = &self.explain_url {
            config.explain_url = Some(url.clone());
        }
        if let Some(base) = &self.base_url {
            config.base_url = Some(base.clone());
        }
        if let Some(cookies) = &self.cookies {
            config.cookies = Some(cookies.clone());
        }
        if let Some(name) = &self.csrf_cookie_name {
            config.csrf_cookie_name = name.clone();
        }
        if let Some(agent) = &self.user_agent {
            config.user_agent = agent.clone();
        }
        if let Some(seconds) = self.timeout_seconds {
            config.timeout_seconds = Some(seconds);
        }

        Ok(config)
    }
}
