//! Configuration for a game.

/// Smallest group the game supports.
pub const MIN_PLAYERS: usize = 3;

/// Configuration for a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum number of valid names `start` accepts (never below 3).
    pub min_players: usize,
    /// Fixed RNG seed. `None` draws the seed from the operating system.
    ///
    /// A fixed seed makes the impostor predictable and is meant for tests.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the minimum number of players (clamped to at least 3).
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players.max(MIN_PLAYERS);
        self
    }

    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
