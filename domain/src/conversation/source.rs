//! Source citation value object

use serde::{Deserialize, Deserializer, Serialize};

/// Base URL used to build a deep link when only a video id is known
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// A citation returned by the backend alongside an answer (Value Object)
///
/// Only `title` is required. The backend fills the optional fields with
/// empty strings when it has nothing to say, so those are read as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Display text
    pub title: String,
    /// Opaque reference to the originating video
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_id: Option<String>,
    /// Chunk reference inside the transcript store
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub chunk_id: Option<String>,
    /// Explicit deep link
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl Source {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_id: None,
            chunk_id: None,
            url: None,
        }
    }

    pub fn with_video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    pub fn with_chunk_id(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunk_id = Some(chunk_id.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The most specific locator available: the URL, else the chunk id.
    pub fn locator(&self) -> Option<&str> {
        self.url.as_deref().or(self.chunk_id.as_deref())
    }

    /// A link to the video, derived from `video_id` when no URL was sent.
    pub fn watch_url(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        self.video_id
            .as_ref()
            .map(|id| format!("{}{}", WATCH_URL_BASE, id))
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_title_only() {
        let source: Source = serde_json::from_str(r#"{"title": "Cuba video"}"#).unwrap();
        assert_eq!(source, Source::new("Cuba video"));
        assert!(source.locator().is_none());
        assert!(source.watch_url().is_none());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let source: Source = serde_json::from_str(
            r#"{"title": "Sin título", "video_id": "", "chunk_id": "", "url": null}"#,
        )
        .unwrap();
        assert!(source.video_id.is_none());
        assert!(source.chunk_id.is_none());
        assert!(source.url.is_none());
    }

    #[test]
    fn test_watch_url_derived_from_video_id() {
        let source = Source::new("Dubai").with_video_id("abc123");
        assert_eq!(
            source.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn test_explicit_url_wins() {
        let source = Source::new("Dubai")
            .with_video_id("abc123")
            .with_chunk_id("abc123_4")
            .with_url("https://example.com/v");
        assert_eq!(source.locator(), Some("https://example.com/v"));
        assert_eq!(source.watch_url().as_deref(), Some("https://example.com/v"));
    }

    #[test]
    fn test_locator_falls_back_to_chunk() {
        let source = Source::new("China").with_chunk_id("xyz_2");
        assert_eq!(source.locator(), Some("xyz_2"));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_value(Source::new("Madagascar")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Madagascar"}));
    }
}
