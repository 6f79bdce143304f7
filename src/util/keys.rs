//! Keyboard handling for the draft textarea.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Key that commits the draft.
pub const COMMIT_KEY: &str = "Enter";

/// The parts of a keyboard event the widget cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    /// Shift held: insert a literal newline instead of submitting.
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self { key: key.into(), shift }
    }

    pub fn is_commit(&self) -> bool {
        self.key == COMMIT_KEY && !self.shift
    }
}

impl From<&leptos::ev::KeyboardEvent> for KeyPress {
    fn from(ev: &leptos::ev::KeyboardEvent) -> Self {
        Self::new(ev.key(), ev.shift_key())
    }
}
