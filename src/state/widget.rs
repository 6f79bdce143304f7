//! Per-instance chat widget state machine.
//!
//! DESIGN
//! ======
//! Two orthogonal dimensions: visibility (a plain boolean) and the request
//! phase (`Idle` / `AwaitingResponse`). The phase is the only guard against
//! overlapping submissions; the network layer does not enforce it.
//!
//! The transcript is append-only. Message ids come from a per-instance
//! counter, so they are strictly increasing in insertion order.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::message::{ConversationMessage, Origin};

/// Request phase of a widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Complete state of one mounted chat widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState {
    visible: bool,
    transcript: Vec<ConversationMessage>,
    draft: String,
    in_flight: bool,
    next_id: u64,
    /// Bumped whenever the view should scroll to the newest entry.
    scroll_seq: u64,
}

impl WidgetState {
    /// Fresh state with the greeting seeded as the first assistant message.
    pub fn new(greeting: &str) -> Self {
        let mut state = Self {
            visible: false,
            transcript: Vec::new(),
            draft: String::new(),
            in_flight: false,
            next_id: 1,
            scroll_seq: 0,
        };
        state.append(Origin::Assistant, greeting);
        state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight { Phase::AwaitingResponse } else { Phase::Idle }
    }

    pub fn scroll_seq(&self) -> u64 {
        self.scroll_seq
    }

    /// Whether `begin_submit` would accept the current draft.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.draft.trim().is_empty()
    }

    /// Flip visibility and return the new value. Opening the panel requests
    /// a scroll to the latest entry.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        if self.visible {
            self.scroll_seq += 1;
        }
        self.visible
    }

    /// Replace the draft verbatim.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Accept the draft for submission: append it as a user message, clear
    /// the draft, and enter `AwaitingResponse`.
    ///
    /// Returns the trimmed query, or `None` (with no state change) when the
    /// trimmed draft is empty or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let query = self.draft.trim().to_owned();
        self.append(Origin::User, query.clone());
        self.draft.clear();
        self.in_flight = true;
        Some(query)
    }

    /// Append an assistant reply (answer or fallback apology).
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.append(Origin::Assistant, text);
    }

    /// Return to `Idle`. Safe to call in any phase.
    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }

    fn append(&mut self, origin: Origin, text: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.transcript.push(ConversationMessage::new(id, origin, text));
        self.scroll_seq += 1;
    }
}
