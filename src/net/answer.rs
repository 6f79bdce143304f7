//! The answer service seam.
//!
//! DESIGN
//! ======
//! The controller talks to `dyn AnswerService`, never to `gloo-net`, so the
//! whole submit flow can be driven against a mock natively. Futures are
//! `?Send` because browser fetch futures are not `Send`.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use super::api;
use super::types::AskError;
use crate::config::ChatConfig;

/// Something that turns a reader question into an answer.
#[async_trait::async_trait(?Send)]
pub trait AnswerService {
    /// Issue exactly one request for `query`.
    ///
    /// # Errors
    ///
    /// Returns an [`AskError`] describing why no answer was produced.
    async fn ask(&self, query: &str) -> Result<String, AskError>;
}

/// Production answer service: one `POST` to the configured endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAnswerService {
    endpoint: String,
    timeout_ms: Option<u32>,
}

impl HttpAnswerService {
    pub fn new(endpoint: impl Into<String>, timeout_ms: Option<u32>) -> Self {
        Self { endpoint: endpoint.into(), timeout_ms }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone(), config.request_timeout_ms)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, query: &str) -> Result<String, AskError> {
        api::post_chat_query(&self.endpoint, query, self.timeout_ms).await
    }
}
