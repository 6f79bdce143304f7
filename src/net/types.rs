//! Wire payloads for the answer endpoint and the request error taxonomy.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// PAYLOADS
// =============================================================================

/// Request body: the trimmed reader question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatQuery<'a> {
    pub query: &'a str,
}

/// Response body. Only the answer text is consumed; other fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatAnswer {
    #[serde(alias = "response")]
    pub answer: String,
}

// =============================================================================
// ERROR
// =============================================================================

/// How a failed attempt is classified. Both kinds surface to the reader as
/// the same fallback apology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The endpoint answered with a non-success status.
    Protocol,
    /// The request never produced a usable response.
    Transport,
}

/// Errors produced by a single ask attempt.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// The request could not be built or sent (network unreachable, etc.).
    #[error("request failed: {0}")]
    Transport(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u32 },

    /// The endpoint returned a non-success HTTP status.
    #[error("answer endpoint returned status {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl AskError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Status { .. } => FailureKind::Protocol,
            Self::Transport(_) | Self::Timeout { .. } | Self::Decode(_) => FailureKind::Transport,
        }
    }
}

/// `true` for 2xx statuses.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a response body into the answer text.
///
/// # Errors
///
/// Returns [`AskError::Decode`] if the body is not JSON or lacks the answer.
pub fn parse_answer(body: &str) -> Result<String, AskError> {
    serde_json::from_str::<ChatAnswer>(body)
        .map(|a| a.answer)
        .map_err(|e| AskError::Decode(e.to_string()))
}
