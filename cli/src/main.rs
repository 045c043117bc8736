//! CLI entrypoint for ragchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use ragchat_application::{ChatController, SubmitOutcome};
use ragchat_domain::ApiDialect;
use ragchat_infrastructure::{ConfigLoader, FileConfig, HttpChatBackend, JsonlConversationLogger};
use ragchat_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ReplConfig, ThinkingIndicator,
};
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting ragchat against {}", config.api.base_url);

    // === Dependency Injection ===
    let backend = HttpChatBackend::new(&config.api.base_url, config.api.dialect)
        .context("Failed to create backend client")?;

    let mut controller = ChatController::new(Arc::new(backend), config.to_chat_params());
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Logging conversation to {}", logger.path().display());
                controller = controller.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation logging disabled"),
        }
    }
    let controller = Arc::new(controller);

    if cli.health {
        return Ok(match controller.health().await {
            Ok(report) => {
                match cli.output {
                    OutputFormat::Text => print!("{}", ConsoleFormatter::format_health(&report)),
                    OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
                }
                if report.is_healthy() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Backend unreachable at {}: {}", config.api.base_url, e);
                ExitCode::FAILURE
            }
        });
    }

    if cli.stats {
        let size = controller.corpus_size().await;
        match cli.output {
            OutputFormat::Text => print!("{}", ConsoleFormatter::format_stats(&size, 0)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&size)),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Chat mode
    let Some(question) = cli.question.as_deref() else {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress,
            history_file: config.repl.history_file.clone(),
        };
        ChatRepl::new(controller).with_config(repl_config).run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    // Single question mode
    let indicator = ThinkingIndicator::start_if(config.repl.show_progress);
    let outcome = controller.submit(question).await;
    indicator.finish();

    match &outcome {
        SubmitOutcome::Answered(message) | SubmitOutcome::Failed(message) => {
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_message(message),
                OutputFormat::Json => ConsoleFormatter::format_json(message),
            };
            println!("{}", output);
        }
        SubmitOutcome::Ignored(rejection) => bail!("{}", rejection),
        SubmitOutcome::Discarded => {}
    }

    Ok(match outcome {
        SubmitOutcome::Answered(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Initialize logging based on verbosity level
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Merge config sources, apply CLI overrides and validate
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(dialect) = cli.dialect {
        config.api.dialect = ApiDialect::from(dialect);
    }
    if let Some(seconds) = cli.timeout {
        config.api.timeout_seconds = seconds;
    }
    if cli.history {
        config.api.send_history = true;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    Ok(config)
}
