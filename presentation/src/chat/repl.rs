//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::chat::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ThinkingIndicator;
use colored::Colorize;
use ragchat_application::{ChatController, SubmitOutcome};
use ragchat_domain::SubmitRejection;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ChatController>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: Arc<ChatController>) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
        }
    }

    /// Apply REPL configuration
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether to show the spinner and banner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(path) = &history_path
            && let Some(parent) = path.parent()
        {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Some(path) = &history_path {
            let _ = rl.load_history(path);
        }

        self.print_welcome().await;

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    self.controller.set_draft(line);
                    let outcome = self.thinking(self.controller.submit_draft()).await;
                    self.print_outcome(&outcome);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("¡Hasta luego!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              ragchat - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{} {}", "Backend:".cyan().bold(), self.controller.backend_location());

        if self.config.show_progress {
            let size = self.controller.corpus_size().await;
            let estimated = if size.reported { "" } else { " (estimado)" };
            println!(
                "{} {}{}",
                "Videos disponibles:".cyan().bold(),
                size.count,
                estimated.dimmed()
            );
        }

        println!();
        print!("{}", ConsoleFormatter::format_suggestions(self.controller.suggestions()));
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /suggest [n], /s   - List suggestions, or ask suggestion n");
        println!("  /clear             - Clear the conversation");
        println!("  /new               - Start a new chat");
        println!("  /transcript, /t    - Show the conversation so far");
        println!("  /stats             - Show corpus statistics");
        println!("  /health            - Check the backend");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("¡Hasta luego!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Clear => {
                self.controller.clear();
                println!("{}", "Conversación borrada.".dimmed());
            }
            ReplCommand::NewChat => {
                self.controller.clear();
                println!("{}", "Nuevo chat.".dimmed());
                print!("{}", ConsoleFormatter::format_suggestions(self.controller.suggestions()));
            }
            ReplCommand::Suggest(None) => {
                print!("{}", ConsoleFormatter::format_suggestions(self.controller.suggestions()));
            }
            ReplCommand::Suggest(Some(index)) => {
                if let Some(text) = self.controller.suggestions().get(index) {
                    println!("{} {}", ">>>".dimmed(), text);
                }
                let outcome = self.thinking(self.controller.select_suggestion(index)).await;
                self.print_outcome(&outcome);
            }
            ReplCommand::Stats => {
                let size = self.controller.corpus_size().await;
                print!(
                    "{}",
                    ConsoleFormatter::format_stats(&size, self.controller.message_count())
                );
                println!();
            }
            ReplCommand::Health => match self.controller.health().await {
                Ok(report) => print!("{}", ConsoleFormatter::format_health(&report)),
                Err(e) => println!("{} {}", "Backend no disponible:".red().bold(), e),
            },
            ReplCommand::Transcript => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(&self.controller.transcript())
                );
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// Await a backend call behind the thinking spinner
    async fn thinking<T>(&self, call: impl Future<Output = T>) -> T {
        let indicator = ThinkingIndicator::start_if(self.config.show_progress);
        let result = call.await;
        indicator.finish();
        result
    }

    fn print_outcome(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Answered(message) | SubmitOutcome::Failed(message) => {
                println!();
                println!("{}", ConsoleFormatter::format_message(message));
            }
            SubmitOutcome::Ignored(SubmitRejection::UnknownSuggestion(index)) => {
                println!("{}", format!("No hay sugerencia número {}", index + 1).yellow());
            }
            SubmitOutcome::Ignored(rejection) => {
                println!("{}", rejection.to_string().yellow());
            }
            SubmitOutcome::Discarded => {
                debug!("Reply arrived after the conversation was cleared");
            }
        }
    }
}
