//! Campaign and AI-advice console: a typed client for the backend plus
//! the view state that sits on top of it.

pub mod api;
pub mod config;
pub mod logging;
pub mod notify;
pub mod ui;
