use crate::core::csrf::{get_cookie, DEFAULT_CSRF_COOKIE};
use crate::core::decoder::Utf8StreamDecoder;
use crate::core::{ExplanationService, JokeSource, JokeView};
use crate::domain::model::{ExplainRequest, ExplanationPhase};
use crate::utils::error::Result;

pub const EXPLAIN_FAILURE_MESSAGE: &str = "An error occurred while explaining the joke.";

/// Drives one joke display: fetches jokes and streams their explanations
/// into the view.
///
/// Both operations take `&mut self`, so a controller runs at most one
/// request at a time.
pub struct JokeController<S, E, V> {
    jokes: S,
    explainer: E,
    view: V,
    cookies: Option<String>,
    csrf_cookie_name: String,
    explanation: String,
    phase: ExplanationPhase,
}

impl<S, E, V> JokeController<S, E, V>
where
    S: JokeSource,
    E: ExplanationService,
    V: JokeView,
{
    pub fn new(jokes: S, explainer: E, view: V) -> Self {
        Self {
            jokes,
            explainer,
            view,
            cookies: None,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            explanation: String::new(),
            phase: ExplanationPhase::Idle,
        }
    }

    /// Cookie string (`name=value; ...`) the CSRF token is read from.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    pub fn with_csrf_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie_name = name.into();
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn phase(&self) -> ExplanationPhase {
        self.phase
    }

    /// Clears the explanation, hides its panel, then shows a fresh joke.
    ///
    /// Fetch and parse failures are returned to the caller untouched.
    pub async fn next_joke(&mut self) -> Result<()> {
        self.explanation.clear();
        self.phase = ExplanationPhase::Idle;
        self.view.clear_explanation();
        self.view.hide_explanation_panel();

        let joke = self.jokes.fetch_joke().await?;
        tracing::debug!(id = ?joke.id, "Fetched joke: {}", joke.joke);

        self.view.set_joke(&joke.joke);
        Ok(())
    }

    /// Explains the joke currently on display.
    ///
    /// Errors never escape: they are logged, reported once through
    /// [`JokeView::alert`] and the returned phase is `Failed`. Text already
    /// streamed stays on screen.
    pub async fn explain_joke(&mut self) -> ExplanationPhase {
        let current_joke = self.view.current_joke();
        tracing::debug!("The joke: {}", current_joke);

        self.explanation.clear();
        self.view.clear_explanation();

        match self.stream_explanation(current_joke).await {
            Ok(()) => self.set_phase(ExplanationPhase::Done),
            Err(e) => {
                tracing::error!(
                    "Error while explaining joke: {} (Category: {:?})",
                    e,
                    e.category()
                );
                self.set_phase(ExplanationPhase::Failed);
                self.view.alert(EXPLAIN_FAILURE_MESSAGE);
            }
        }

        self.phase
    }

    async fn stream_explanation(&mut self, joke: String) -> Result<()> {
        self.set_phase(ExplanationPhase::Requesting);

        let csrf_token = self.csrf_token();
        let request = ExplainRequest { joke };
        let mut stream = self
            .explainer
            .request_explanation(&request, csrf_token.as_deref())
            .await?;

        self.set_phase(ExplanationPhase::Streaming);

        let mut decoder = Utf8StreamDecoder::new();
        while let Some(chunk) = stream.next_chunk().await? {
            tracing::debug!("Received chunk of {} bytes", chunk.len());
            let text = decoder.decode(&chunk);
            self.push_explanation(&text);
        }

        let tail = decoder.finish();
        if !tail.is_empty() {
            self.push_explanation(&tail);
        }

        tracing::debug!("Explanation complete ({} chars)", self.explanation.len());
        Ok(())
    }

    fn push_explanation(&mut self, text: &str) {
        self.explanation.push_str(text);
        self.view.append_explanation(text);
        self.view.show_explanation_panel();
    }

    fn csrf_token(&self) -> Option<String> {
        let token = self
            .cookies
            .as_deref()
            .and_then(|cookies| get_cookie(cookies, &self.csrf_cookie_name));
        if token.is_none() {
            tracing::warn!(
                "No '{}' cookie available, sending request without X-CSRFToken",
                self.csrf_cookie_name
            );
        }
        token
    }

    fn set_phase(&mut self, phase: ExplanationPhase) {
        tracing::debug!("Explanation phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
