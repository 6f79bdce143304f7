//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `message` is the immutable transcript entry; `widget` is the per-instance
//! state machine. Neither touches Leptos or the network, so every
//! transition is testable synchronously.

pub mod message;
pub mod widget;
