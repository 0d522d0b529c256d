pub mod controller;
pub mod csrf;
pub mod decoder;

pub use crate::domain::model::{ExplainRequest, ExplanationPhase, Joke};
pub use crate::domain::ports::{
    ChunkStream, ConfigProvider, ExplanationService, JokeSource, JokeView,
};
pub use crate::utils::error::Result;
