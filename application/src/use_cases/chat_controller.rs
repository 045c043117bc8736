//! Chat controller use case.
//!
//! [`ChatController`] owns one [`Session`] and drives it against a
//! [`ChatBackend`]. It is the only thing that mutates the session:
//!
//! 1. `submit` validates and accepts the text, appending the user message
//!    before any suspension point
//! 2. one backend call, bounded by the configured timeout
//! 3. the answer (or the fixed failure notice) is folded back in
//!
//! Backend failures never escape as errors. They are logged and turned into
//! an assistant message so the view always ends in a stable state.

use crate::config::ChatParams;
use crate::ports::chat_backend::{BackendError, ChatBackend};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use ragchat_domain::util::truncate_str;
use ragchat_domain::{
    ChatReply, ChatRequest, CorpusSize, HealthReport, Message, Resolution, Session, SessionState,
    SubmitRejection, Submission, Suggestions,
};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Result of a `submit` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened (blank input, busy, unknown suggestion)
    Ignored(SubmitRejection),
    /// The backend answered; carries the appended assistant message
    Answered(Message),
    /// The call failed; carries the appended failure notice
    Failed(Message),
    /// The transcript was cleared while in flight; the reply was dropped
    Discarded,
}

impl SubmitOutcome {
    /// The assistant message appended by this submission, if any
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Answered(message) | SubmitOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Conversation session controller.
///
/// Cheap to share behind an `Arc`. The session lock is never held across an
/// `.await`, so overlapping `submit` futures on the same controller are
/// legal: all but the first are rejected while it is in flight.
pub struct ChatController {
    backend: Arc<dyn ChatBackend>,
    params: ChatParams,
    session: Mutex<Session>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatController {
    pub fn new(backend: Arc<dyn ChatBackend>, params: ChatParams) -> Self {
        Self {
            backend,
            params,
            session: Mutex::new(Session::new()),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &ChatParams {
        &self.params
    }

    pub fn suggestions(&self) -> &Suggestions {
        &self.params.suggestions
    }

    pub fn backend_location(&self) -> String {
        self.backend.location()
    }

    // ==================== Session Access ====================

    /// Snapshot of the transcript
    pub fn transcript(&self) -> Vec<Message> {
        self.lock().transcript().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_pending()
    }

    pub fn state(&self) -> SessionState {
        self.lock().state()
    }

    pub fn draft(&self) -> String {
        self.lock().draft().to_string()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock().set_draft(text);
    }

    // ==================== Operations ====================

    /// Submit a user message and wait for its resolution.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let accepted = self.lock().accept(text);
        let submission = match accepted {
            Ok(submission) => submission,
            Err(rejection) => {
                debug!("Submission ignored: {}", rejection);
                return SubmitOutcome::Ignored(rejection);
            }
        };

        info!(
            "Submitting message: {}",
            truncate_str(submission.utterance().as_str(), 100)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            json!({
                "content": submission.utterance().as_str(),
                "epoch": submission.epoch(),
            }),
        ));

        let request = self.build_request(&submission);
        let in_flight = InFlight {
            controller: self,
            submission: Some(submission),
        };
        let result = self.call_backend(&request).await;
        match in_flight.finish() {
            Some(submission) => self.resolve(submission, result),
            None => SubmitOutcome::Discarded,
        }
    }

    /// Submit whatever is in the draft.
    ///
    /// A blank draft is left untouched.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }

    /// Submit the suggestion at `index` (zero-based).
    ///
    /// Selecting a suggestion by its text is just [`submit`](Self::submit).
    pub async fn select_suggestion(&self, index: usize) -> SubmitOutcome {
        let Some(text) = self.params.suggestions.get(index).map(str::to_string) else {
            debug!("No suggestion at index {}", index);
            return SubmitOutcome::Ignored(SubmitRejection::UnknownSuggestion(index));
        };
        self.submit(&text).await
    }

    /// Empty the transcript.
    ///
    /// An in-flight request is not cancelled; its reply will be discarded.
    pub fn clear(&self) {
        let pending = {
            let mut session = self.lock();
            session.clear();
            session.is_pending()
        };
        info!("Transcript cleared (request in flight: {})", pending);
        self.conversation_logger.log(ConversationEvent::new(
            "transcript_cleared",
            json!({ "pending": pending }),
        ));
    }

    /// Corpus size for display, falling back to the static default.
    ///
    /// Never fails and never touches the session.
    pub async fn corpus_size(&self) -> CorpusSize {
        let result = self.bounded(self.backend.corpus_stats()).await;
        match result {
            Ok(stats) => CorpusSize::from_stats(Some(&stats)),
            Err(e) => {
                warn!("Could not load corpus stats: {}", e);
                CorpusSize::fallback()
            }
        }
    }

    /// Probe backend health.
    pub async fn health(&self) -> Result<HealthReport, BackendError> {
        self.bounded(self.backend.health()).await
    }

    // ==================== Internals ====================

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn build_request(&self, submission: &Submission) -> ChatRequest {
        let mut request = ChatRequest::new(submission.utterance().as_str())
            .with_conversation_id(self.params.conversation_id.clone());
        if self.params.send_history {
            request = request.with_history(submission.history());
        }
        request
    }

    async fn call_backend(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        debug!(
            "Sending chat request to {} ({} history entries)",
            self.backend.location(),
            request.history.len()
        );
        self.bounded(self.backend.send_chat(request)).await
    }

    async fn bounded<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, BackendError>>,
    ) -> Result<T, BackendError> {
        match self.params.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| BackendError::Timeout)?,
            None => call.await,
        }
    }

    fn resolve(
        &self,
        submission: Submission,
        result: Result<ChatReply, BackendError>,
    ) -> SubmitOutcome {
        let epoch = submission.epoch();
        let failed = result.is_err();

        // Events are written after the lock is released
        let (applied, event) = {
            let mut session = self.lock();
            let (resolution, event) = match result {
                Ok(reply) => {
                    debug!(
                        "Received answer ({} bytes, {} sources)",
                        reply.response.len(),
                        reply.sources.len()
                    );
                    let event = ConversationEvent::new(
                        "assistant_reply",
                        json!({
                            "content": &reply.response,
                            "sources": &reply.sources,
                            "epoch": epoch,
                        }),
                    );
                    (session.answer(submission, reply.response, reply.sources), event)
                }
                Err(e) => {
                    warn!("Chat request failed: {}", e);
                    let event = ConversationEvent::new(
                        "request_failed",
                        json!({
                            "kind": e.kind(),
                            "error": e.to_string(),
                            "epoch": epoch,
                        }),
                    );
                    (
                        session.fail(submission, self.params.failure_message.as_str()),
                        event,
                    )
                }
            };
            let applied = match resolution {
                Resolution::Applied => session.transcript().last().cloned(),
                Resolution::Discarded => None,
            };
            (applied, event)
        };

        let Some(message) = applied else {
            info!("Reply for cleared transcript discarded (epoch {})", epoch);
            self.conversation_logger.log(ConversationEvent::new(
                "reply_discarded",
                json!({ "epoch": epoch }),
            ));
            return SubmitOutcome::Discarded;
        };

        self.conversation_logger.log(event);
        if failed {
            SubmitOutcome::Failed(message)
        } else {
            SubmitOutcome::Answered(message)
        }
    }

    /// Resolve a submission whose `submit` future was dropped mid-flight.
    fn abandon(&self, submission: Submission) {
        let epoch = submission.epoch();
        let resolution = self
            .lock()
            .fail(submission, self.params.failure_message.as_str());
        warn!("Submission dropped before the backend answered (epoch {})", epoch);
        self.conversation_logger.log(ConversationEvent::new(
            "request_abandoned",
            json!({
                "epoch": epoch,
                "applied": resolution == Resolution::Applied,
            }),
        ));
    }
}

/// Keeps an accepted submission resolvable if the `submit` future is dropped.
///
/// Dropping it while still armed resolves the submission with the failure
/// notice, so `pending` always returns to false.
struct InFlight<'a> {
    controller: &'a ChatController,
    submission: Option<Submission>,
}

impl InFlight<'_> {
    fn finish(mut self) -> Option<Submission> {
        self.submission.take()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(submission) = self.submission.take() {
            self.controller.abandon(submission);
        }
    }
}
