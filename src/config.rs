//! Chat widget configuration.
//!
//! The widget reads nothing ambient: the host passes a `ChatConfig` (or
//! relies on [`ChatConfig::default`]). Hosts that keep overrides as JSON
//! can parse a partial document with [`ChatConfig::from_json`]; missing
//! fields fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "/api/rag_chat";
pub const DEFAULT_GREETING: &str =
    "Hi! I'm your AI-native RAG assistant for Physical AI & Humanoid Robotics. Ask me anything about the textbook!";
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I couldn't process your request. Please try again.";
pub const DEFAULT_TITLE: &str = "AI RAG Assistant";
pub const DEFAULT_PLACEHOLDER: &str = "Type your message...";

/// Errors produced while parsing or validating a config override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for `ChatConfig`.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The endpoint is neither an absolute path nor an http(s) URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The fallback apology must be visible text.
    #[error("fallback message must not be blank")]
    EmptyFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Answer endpoint; receives `POST {"query": ...}`.
    pub endpoint: String,
    /// Assistant message seeded into every fresh transcript.
    pub greeting: String,
    /// Apology shown for any failed attempt, protocol or transport.
    pub fallback_message: String,
    pub title: String,
    pub placeholder: String,
    /// Give up on a request after this many milliseconds. `None` waits
    /// indefinitely.
    pub request_timeout_ms: Option<u32>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            request_timeout_ms: None,
        }
    }
}

impl ChatConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a field fails
    /// validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that would otherwise fail silently at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_endpoint(&self.endpoint) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.fallback_message.trim().is_empty() {
            return Err(ConfigError::EmptyFallback);
        }
        Ok(())
    }

    /// Keep this config if it validates; otherwise log why and use the
    /// defaults, so the widget never shows a blank apology or posts to a
    /// malformed endpoint.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                leptos::logging::warn!("chat widget config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }
}

fn is_valid_endpoint(endpoint: &str) -> bool {
    if endpoint.chars().any(char::is_whitespace) {
        return false;
    }
    (endpoint.starts_with('/') && !endpoint.starts_with("//"))
        || endpoint.starts_with("http://")
        || endpoint.starts_with("https://")
}
