//! Small helpers shared by the widget component and its host.

pub mod keys;
pub mod markdown;
pub mod theme;
