use crate::adapters::terminal::TerminalView;
use crate::app::commands::{Command, HELP};
use crate::core::controller::JokeController;
use crate::core::{ExplanationPhase, ExplanationService, JokeSource};
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub type TerminalController<S, E, W> = JokeController<S, E, TerminalView<W>>;

/// Shows a first joke, then reads commands line by line until `quit` or
/// end of input.
pub async fn run_interactive<S, E, W, R>(
    controller: &mut TerminalController<S, E, W>,
    input: R,
) -> Result<()>
where
    S: JokeSource,
    E: ExplanationService,
    W: Write + Send,
    R: AsyncBufRead + Unpin,
{
    controller.view_mut().notice(HELP);
    show_next_joke(controller).await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Next) => show_next_joke(controller).await,
            Ok(Command::Explain) => {
                explain(controller).await;
            }
            Ok(Command::Help) => controller.view_mut().notice(HELP),
            Ok(Command::Quit) => break,
            Err(message) => {
                tracing::debug!("{}", message);
                controller.view_mut().notice(&format!("{}. {}", message, HELP));
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Fetches one joke, explains it and returns the final phase.
pub async fn run_once<S, E, W>(controller: &mut TerminalController<S, E, W>) -> Result<ExplanationPhase>
where
    S: JokeSource,
    E: ExplanationService,
    W: Write + Send,
{
    controller.next_joke().await?;
    Ok(explain(controller).await)
}

async fn show_next_joke<S, E, W>(controller: &mut TerminalController<S, E, W>)
where
    S: JokeSource,
    E: ExplanationService,
    W: Write + Send,
{
    if let Err(e) = controller.next_joke().await {
        tracing::error!("Failed to fetch joke: {} (Category: {:?})", e, e.category());
        controller
            .view_mut()
            .notice(&format!("Could not fetch a joke: {}", e.user_friendly_message()));
    }
}

async fn explain<S, E, W>(controller: &mut TerminalController<S, E, W>) -> ExplanationPhase
where
    S: JokeSource,
    E: ExplanationService,
    W: Write + Send,
{
    let phase = controller.explain_joke().await;
    controller.view_mut().finish_explanation();
    phase
}
