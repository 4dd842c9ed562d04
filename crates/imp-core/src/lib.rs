//! Session state machine for the Impostor party game.
//!
//! A single shared [`Game`] walks a small group of players, one seat at a
//! time, through a secret-role reveal: everyone but the impostor sees the
//! secret word, the impostor only sees a clue. Once every seat has looked,
//! a starter is announced and the impostor can be revealed.
//!
//! This crate has no presentation concerns. The web and terminal front ends
//! render the [`View`] and [`Reveal`] values it produces.

/// Fixed word/clue catalogs and custom catalog loading.
pub mod catalog;
/// Game configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The process-wide game state machine.
pub mod game;
/// Player name parsing and validation.
pub mod roster;
/// A fully dealt session: roster, secret pair, impostor and cursor.
pub mod session;

/// Re-export catalog types.
pub use catalog::{Catalog, SecretPair};
/// Re-export configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{CatalogError, CatalogResult, GameError, GameResult};
/// Re-export state machine types.
pub use game::{Advance, Game, Reveal, View};
/// Re-export roster types.
pub use roster::{Roster, parse_names};
/// Re-export session types.
pub use session::{Role, Session};
