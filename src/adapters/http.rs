use crate::core::{
    ChunkStream, ConfigProvider, ExplainRequest, ExplanationService, Joke, JokeSource,
};
use crate::utils::error::{JokeError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

pub const DEFAULT_JOKE_ENDPOINT: &str = "https://icanhazdadjoke.com";
pub const DEFAULT_USER_AGENT: &str = concat!("joke-explainer/", env!("CARGO_PKG_VERSION"));
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub fn build_client<C: ConfigProvider>(config: &C) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent());
    if let Some(seconds) = config.timeout_seconds() {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    Ok(builder.build()?)
}

/// Resolves `endpoint` against `base_url` when it is relative.
pub fn resolve_endpoint(endpoint: &str, base_url: Option<&str>) -> Result<Url> {
    match Url::parse(endpoint) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base_url.ok_or_else(|| JokeError::MissingConfigError {
                field: "base_url".to_string(),
            })?;
            Ok(Url::parse(base)?.join(endpoint)?)
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: Client,
    endpoint: String,
}

impl HttpJokeSource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.joke_endpoint())
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&self) -> Result<Joke> {
        tracing::debug!("Fetching joke from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("Joke source response status: {}", response.status());

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Debug, Clone)]
pub struct HttpExplanationService {
    client: Client,
    url: Url,
    cookies: Option<String>,
}

impl HttpExplanationService {
    pub fn new(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            cookies: None,
        }
    }

    /// Sends `cookies` as the `Cookie` header, the way a browser would.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Result<Self> {
        let explain_url = config
            .explain_url()
            .ok_or_else(|| JokeError::MissingConfigError {
                field: "explain_url".to_string(),
            })?;
        let url = resolve_endpoint(explain_url, config.base_url())?;

        let service = Self::new(client, url);
        Ok(match config.cookies() {
            Some(cookies) if !cookies.trim().is_empty() => service.with_cookies(cookies),
            _ => service,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ExplanationService for HttpExplanationService {
    async fn request_explanation(
        &self,
        request: &ExplainRequest,
        csrf_token: Option<&str>,
    ) -> Result<Box<dyn ChunkStream>> {
        tracing::debug!("Posting joke to: {}", self.url);

        let mut builder = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(request)?);

        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }
        if let Some(cookies) = &self.cookies {
            builder = builder.header(COOKIE, cookies);
        }

        let response = builder.send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(Box::new(HttpChunkStream { response }))
    }
}

/// Reads a response body chunk by chunk as the server flushes it.
pub struct HttpChunkStream {
    response: Response,
}

#[async_trait]
impl ChunkStream for HttpChunkStream {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.response.chunk().await?.map(|bytes| bytes.to_vec()))
    }
}
