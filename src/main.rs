use clap::Parser;
use joke_explainer::adapters::http::build_client;
use joke_explainer::app::session;
use joke_explainer::core::ExplanationPhase;
use joke_explainer::utils::error::{ErrorSeverity, JokeError};
use joke_explainer::utils::{logger, validation::Validate};
use joke_explainer::{
    AppConfig, CliConfig, HttpExplanationService, HttpJokeSource, JokeController, TerminalView,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting joke-explainer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = build_client(&config)?;
    let jokes = HttpJokeSource::from_config(client.clone(), &config);
    let explainer = HttpExplanationService::from_config(client, &config)?;
    tracing::info!("Explanation endpoint: {}", explainer.url());

    let mut controller = JokeController::new(jokes, explainer, TerminalView::stdout())
        .with_csrf_cookie_name(config.csrf_cookie_name.clone());
    if let Some(cookies) = &config.cookies {
        controller = controller.with_cookies(cookies.clone());
    }

    if cli.explain_once {
        match session::run_once(&mut controller).await {
            Ok(ExplanationPhase::Done) => {}
            Ok(phase) => {
                tracing::warn!("Explanation ended in phase {:?}", phase);
                std::process::exit(1);
            }
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = session::run_interactive(&mut controller, stdin).await {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> joke_explainer::Result<AppConfig> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}

fn exit_with(e: &JokeError) -> ! {
    tracing::error!(
        "❌ joke-explainer failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
