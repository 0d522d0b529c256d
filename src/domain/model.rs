use serde::{Deserialize, Serialize};

/// Body returned by the joke source. Only `joke` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub joke: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl Joke {
    pub fn new(joke: impl Into<String>) -> Self {
        Self {
            joke: joke.into(),
            id: None,
            status: None,
        }
    }
}

/// Body POSTed to the explanation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub joke: String,
}

/// Lifecycle of one explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplanationPhase {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Done,
    Failed,
}
