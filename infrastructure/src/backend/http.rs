//! HTTP implementation of the chat backend port

use super::error::{HttpError, Result};
use async_trait::async_trait;
use ragchat_application::{BackendError, ChatBackend};
use ragchat_domain::{ApiDialect, ChatReply, ChatRequest, CorpusStats, HealthReport};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const USER_AGENT: &str = concat!("ragchat/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Chat backend reached over HTTP/JSON
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
    dialect: ApiDialect,
}

impl HttpChatBackend {
    /// Create a backend client for `base_url` speaking `dialect`
    pub fn new(base_url: &str, dialect: ApiDialect) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Self::with_client(client, base_url, dialect)
    }

    /// Create a backend with an existing client (shared pools, tests)
    pub fn with_client(client: reqwest::Client, base_url: &str, dialect: ApiDialect) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        info!("HttpChatBackend initialized: {} ({})", base_url, dialect);
        Ok(Self {
            client,
            base_url,
            dialect,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dialect(&self) -> ApiDialect {
        self.dialect
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = self.url(self.dialect.chat_path());
        debug!("POST {}", url);
        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send_chat(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<ChatReply, BackendError> {
        self.post_chat(request).await.map_err(BackendError::from)
    }

    async fn corpus_stats(&self) -> std::result::Result<CorpusStats, BackendError> {
        self.get_json(self.dialect.stats_path())
            .await
            .map_err(BackendError::from)
    }

    async fn health(&self) -> std::result::Result<HealthReport, BackendError> {
        self.get_json(self.dialect.health_path())
            .await
            .map_err(BackendError::from)
    }

    fn location(&self) -> String {
        self.url(self.dialect.chat_path())
    }
}

/// Check the status, then decode the body as JSON
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(HttpError::status(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| HttpError::parse(e, &body))
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(HttpError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragchat_domain::{Message, Source};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer, dialect: ApiDialect) -> HttpChatBackend {
        HttpChatBackend::new(&server.uri(), dialect).unwrap()
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url(" https://api.example.com ").unwrap(),
            "https://api.example.com"
        );
        assert!(normalize_base_url("localhost:8000").is_err());
        assert!(normalize_base_url("http://").is_err());
        assert!(normalize_base_url("").is_err());
    }

    #[tokio::test]
    async fn test_rag_dialect_posts_to_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({"message": "¿Qué opinó sobre Cuba?", "history": []})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Opinó que...",
                "sources": [{"title": "Cuba video", "video_id": "abc", "url": "https://www.youtube.com/watch?v=abc"}],
                "total_chunks_used": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend(&server, ApiDialect::Rag)
            .send_chat(&ChatRequest::new("¿Qué opinó sobre Cuba?"))
            .await
            .unwrap();

        assert_eq!(reply.response, "Opinó que...");
        assert_eq!(
            reply.sources,
            vec![
                Source::new("Cuba video")
                    .with_video_id("abc")
                    .with_url("https://www.youtube.com/watch?v=abc")
            ]
        );
    }

    #[tokio::test]
    async fn test_legacy_dialect_posts_to_api_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({
                "message": "hola",
                "history": [{"role": "user", "content": "antes"}],
                "conversation_id": "default"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "¡Hola!",
                "sources": [{"title": "Intro", "video_id": "", "chunk_id": ""}],
                "conversation_id": "default"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ChatRequest::new("hola")
            .with_history(&[Message::user("antes")])
            .with_conversation_id(Some("default"));
        let reply = backend(&server, ApiDialect::Legacy)
            .send_chat(&request)
            .await
            .unwrap();

        assert_eq!(reply.response, "¡Hola!");
        assert_eq!(reply.sources, vec![Source::new("Intro")]);
    }

    #[tokio::test]
    async fn test_missing_sources_reads_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "X"})))
            .mount(&server)
            .await;

        let reply = backend(&server, ApiDialect::Rag)
            .send_chat(&ChatRequest::new("q"))
            .await
            .unwrap();

        assert_eq!(reply.response, "X");
        assert!(reply.sources.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(json!({"detail": "Chatbot no inicializado"})),
            )
            .mount(&server)
            .await;

        let err = backend(&server, ApiDialect::Rag)
            .send_chat(&ChatRequest::new("q"))
            .await
            .unwrap_err();

        match err {
            BackendError::Status { code, body } => {
                assert_eq!(code, 503);
                assert!(body.contains("Chatbot no inicializado"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend(&server, ApiDialect::Rag)
            .send_chat(&ChatRequest::new("q"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "X"})))
            .mount(&server)
            .await;

        let err = backend(&server, ApiDialect::Rag)
            .send_chat(&ChatRequest::new("q"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend =
            HttpChatBackend::new(&format!("http://{}", addr), ApiDialect::Rag).unwrap();
        let err = backend
            .send_chat(&ChatRequest::new("q"))
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Connection(_)), "got {:?}", err);
        assert_eq!(err.kind(), "connection");
    }

    #[tokio::test]
    async fn test_stats_per_dialect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stats"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"total_chunks": 1520, "status": "ready"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "x"})))
            .mount(&server)
            .await;

        let legacy = backend(&server, ApiDialect::Legacy).corpus_stats().await.unwrap();
        assert_eq!(legacy.total_chunks, 1520);

        let rag = backend(&server, ApiDialect::Rag).corpus_stats().await;
        assert!(rag.is_err());
    }

    #[tokio::test]
    async fn test_stats_not_ready_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stats"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"error": "no collection", "status": "not_ready"})),
            )
            .mount(&server)
            .await;

        let result = backend(&server, ApiDialect::Legacy).corpus_stats().await;
        assert_eq!(result.unwrap_err().kind(), "decode");
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "message": "API funcionando correctamente",
                "vector_store_ready": true
            })))
            .mount(&server)
            .await;

        let report = backend(&server, ApiDialect::Rag).health().await.unwrap();
        assert!(report.is_healthy());
    }

    #[test]
    fn test_location_includes_chat_path() {
        let backend = HttpChatBackend::new("http://localhost:8000/", ApiDialect::Legacy).unwrap();
        assert_eq!(backend.location(), "http://localhost:8000/api/chat");
        assert_eq!(backend.base_url(), "http://localhost:8000");
    }
}
