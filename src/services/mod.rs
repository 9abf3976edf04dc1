//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Every service takes the session's `SessionState` explicitly and performs a
//! synchronous in-memory mutation. Route handlers stay focused on cookie and
//! JSON plumbing.

pub mod auth;
pub mod chat;
pub mod history;
pub mod metrics;
pub mod session;
pub mod view;
