//! Console output formatter for chat messages

use colored::Colorize;
use ragchat_domain::{CorpusSize, HealthReport, Message, Role, Source, Suggestions};
use serde::Serialize;

/// Formats transcript entries and backend status for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single transcript entry, citations included
    pub fn format_message(message: &Message) -> String {
        let mut output = String::new();

        let label = match message.role() {
            Role::User => "Tú".magenta().bold(),
            Role::Assistant => "Asistente".cyan().bold(),
        };
        output.push_str(&format!("{}\n", label));
        output.push_str(&Self::indent(message.content(), "  "));
        output.push('\n');

        if message.has_sources() {
            output.push('\n');
            output.push_str(&Self::format_sources(message.sources()));
        }

        output
    }

    /// Format the citation block shown under an answer
    pub fn format_sources(sources: &[Source]) -> String {
        let mut output = String::new();
        let count = sources.len();

        output.push_str(&format!(
            "  {}\n",
            format!("📚 Fuentes ({} {})", count, Self::videos(count)).yellow()
        ));
        for (i, source) in sources.iter().enumerate() {
            output.push_str(&format!("    📹 Fuente {}: {}\n", i + 1, source.title));
            if let Some(url) = source.watch_url() {
                output.push_str(&format!("       {}\n", url.dimmed()));
            } else if let Some(chunk) = &source.chunk_id {
                output.push_str(&format!("       {}\n", chunk.dimmed()));
            }
        }
        output.push_str(&format!(
            "  {}\n",
            format!("✅ Basado en {} {}", count, Self::videos(count)).green()
        ));

        output
    }

    /// Format the full transcript, oldest first
    pub fn format_transcript(messages: &[Message]) -> String {
        if messages.is_empty() {
            return format!("{}\n", "(conversación vacía)".dimmed());
        }

        messages
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the greeting block with the suggested questions
    pub fn format_suggestions(suggestions: &Suggestions) -> String {
        let mut output = format!("{}\n", "Preguntas sugeridas:".cyan().bold());
        for (i, suggestion) in suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }
        output
    }

    /// Format corpus and session statistics
    pub fn format_stats(size: &CorpusSize, message_count: usize) -> String {
        let mut output = Self::section_header("Estadísticas");
        output.push_str(&format!(
            "{} {}",
            "Videos disponibles:".cyan().bold(),
            size.count
        ));
        if !size.reported {
            output.push_str(&format!(" {}", "(estimado)".dimmed()));
        }
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Mensajes en la conversación:".cyan().bold(),
            message_count
        ));
        output
    }

    /// Format a health probe result
    pub fn format_health(report: &HealthReport) -> String {
        let mut output = String::new();
        let status = if report.is_healthy() {
            report.status.green().bold()
        } else {
            report.status.red().bold()
        };
        output.push_str(&format!("{} {}\n", "Estado:".cyan().bold(), status));

        if let Some(ready) = report.vector_store_ready {
            let ready = if ready { "sí".green() } else { "no".red() };
            output.push_str(&format!("{} {}\n", "Base vectorial lista:".cyan().bold(), ready));
        }
        if let Some(message) = &report.message {
            output.push_str(&format!("{}\n", message));
        }
        if let Some(error) = &report.error {
            output.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        }

        output
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn videos(count: usize) -> &'static str {
        if count == 1 { "video" } else { "videos" }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.bold().underline(), "─".repeat(40).dimmed())
    }

    fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
