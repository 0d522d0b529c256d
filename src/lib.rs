pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::core::controller::JokeController;
pub use adapters::http::{HttpExplanationService, HttpJokeSource};
pub use adapters::memory::MemoryView;
pub use adapters::terminal::TerminalView;
pub use config::AppConfig;
pub use utils::error::{JokeError, Result};
