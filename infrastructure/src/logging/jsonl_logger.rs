//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use ragchat_application::{ConversationEvent, ConversationLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Appends to an existing file so successive sessions share one log.
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log at the given path.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened; the caller falls back to no logging.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open conversation log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({"content": "¿Qué opinó sobre Cuba?", "epoch": 0}),
        ));
        logger.log(ConversationEvent::new(
            "assistant_reply",
            serde_json::json!({
                "content": "Opinó que...",
                "sources": [{"title": "Cuba video"}],
                "epoch": 0
            }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("type").is_some());
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "user_message");
        assert_eq!(records[0]["content"], "¿Qué opinó sobre Cuba?");
        assert_eq!(records[1]["type"], "assistant_reply");
        assert_eq!(records[1]["sources"][0]["title"], "Cuba video");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "transcript_cleared",
            serde_json::json!(true),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "transcript_cleared");
        assert_eq!(records[0]["data"], true);
    }

    #[test]
    fn test_jsonl_logger_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chat.jsonl");

        for content in ["uno", "dos"] {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            assert_eq!(logger.path(), path.as_path());
            logger.log(ConversationEvent::new(
                "user_message",
                serde_json::json!({"content": content}),
            ));
        }

        let contents: Vec<_> = read_lines(&path)
            .iter()
            .map(|r| r["content"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(contents, vec!["uno", "dos"]);
    }
}
