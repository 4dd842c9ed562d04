//! State shared across handlers.

use std::sync::Arc;

use imp_core::Game;
use tokio::sync::Mutex;

/// The one game of this process, behind a single mutex.
///
/// Not per-client: every request sees and mutates the same session.
#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<Game>>,
}

impl AppState {
    /// Wrap a game for sharing.
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// The shared game.
    pub fn game(&self) -> &Mutex<Game> {
        &self.game
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Game::default())
    }
}
