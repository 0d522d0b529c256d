use crate::domain::model::{ExplainRequest, Joke};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn joke_endpoint(&self) -> &str;
    fn explain_url(&self) -> Option<&str>;
    fn base_url(&self) -> Option<&str>;
    fn cookies(&self) -> Option<&str>;
    fn csrf_cookie_name(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self) -> Result<Joke>;
}

/// Incremental reader over a response body. `Ok(None)` marks the end.
#[async_trait]
pub trait ChunkStream: Send {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn request_explanation(
        &self,
        request: &ExplainRequest,
        csrf_token: Option<&str>,
    ) -> Result<Box<dyn ChunkStream>>;
}

/// Display surface for the joke and its explanation.
pub trait JokeView: Send {
    fn set_joke(&mut self, joke: &str);
    fn current_joke(&self) -> String;
    fn clear_explanation(&mut self);
    fn append_explanation(&mut self, text: &str);
    fn show_explanation_panel(&mut self);
    fn hide_explanation_panel(&mut self);
    fn alert(&mut self, message: &str);
}
