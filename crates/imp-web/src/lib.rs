//! HTTP front end for the Impostor party game.
//!
//! Serves the pass-the-phone flow as plain HTML pages over a single shared
//! [`imp_core::Game`]. Every client talks to the same session.

/// Router and request handlers.
pub mod app;
/// Server configuration.
pub mod config;
/// Error types for the server.
pub mod error;
/// HTML page rendering.
pub mod pages;
/// Shared application state.
pub mod state;

/// Re-export the router constructor and server entry point.
pub use app::{router, serve};
/// Re-export configuration.
pub use config::ServerConfig;
/// Re-export error types.
pub use error::{WebError, WebResult};
/// Re-export shared state.
pub use state::AppState;
