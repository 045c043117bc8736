//! Slash commands understood by the chat REPL

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Empty the transcript
    Clear,
    /// Same as `Clear`, announced as a fresh chat
    NewChat,
    /// List suggestions, or send the one at this zero-based index
    Suggest(Option<usize>),
    Stats,
    Health,
    Transcript,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary input.
    ///
    /// Suggestion numbers are typed one-based and stored zero-based.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match (name, arg) {
            ("/quit" | "/exit" | "/q", None) => ReplCommand::Quit,
            ("/help" | "/h" | "/?", None) => ReplCommand::Help,
            ("/clear", None) => ReplCommand::Clear,
            ("/new", None) => ReplCommand::NewChat,
            ("/suggest" | "/s", None) => ReplCommand::Suggest(None),
            ("/suggest" | "/s", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => ReplCommand::Suggest(Some(n - 1)),
                _ => ReplCommand::Unknown(line.to_string()),
            },
            ("/stats", None) => ReplCommand::Stats,
            ("/health", None) => ReplCommand::Health,
            ("/transcript" | "/t", None) => ReplCommand::Transcript,
            _ => ReplCommand::Unknown(line.to_string()),
        };

        if parts.next().is_some() {
            return Some(ReplCommand::Unknown(line.to_string()));
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("¿Qué opinó sobre Cuba?"), None);
        assert_eq!(ReplCommand::parse("a/b"), None);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/?"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse(" /clear "), Some(ReplCommand::Clear));
        assert_eq!(ReplCommand::parse("/new"), Some(ReplCommand::NewChat));
        assert_eq!(ReplCommand::parse("/stats"), Some(ReplCommand::Stats));
        assert_eq!(ReplCommand::parse("/health"), Some(ReplCommand::Health));
        assert_eq!(ReplCommand::parse("/t"), Some(ReplCommand::Transcript));
    }

    #[test]
    fn test_suggest_index_is_one_based() {
        assert_eq!(ReplCommand::parse("/suggest"), Some(ReplCommand::Suggest(None)));
        assert_eq!(ReplCommand::parse("/suggest 4"), Some(ReplCommand::Suggest(Some(3))));
        assert_eq!(ReplCommand::parse("/s 1"), Some(ReplCommand::Suggest(Some(0))));
    }

    #[test]
    fn test_bad_suggest_argument_is_unknown() {
        for line in ["/suggest 0", "/suggest dos", "/suggest 1 2"] {
            assert!(matches!(ReplCommand::parse(line), Some(ReplCommand::Unknown(_))));
        }
    }

    #[test]
    fn test_unexpected_argument_is_unknown() {
        assert_eq!(
            ReplCommand::parse("/clear now"),
            Some(ReplCommand::Unknown("/clear now".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }
}
