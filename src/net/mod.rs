//! Networking for the widget's single request/response call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire payloads and error taxonomy, `api` performs the
//! HTTP call, and `answer` exposes it behind the `AnswerService` seam that
//! the controller depends on.

pub mod answer;
pub mod api;
pub mod types;
