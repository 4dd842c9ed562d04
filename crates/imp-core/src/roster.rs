//! Player names.
//!
//! Names arrive as free text, one per line. Players are addressed by seat
//! (their position in the list), so two players may share a display name.

use serde::Serialize;

use crate::config::MIN_PLAYERS;
use crate::error::{GameError, GameResult};

/// Split raw text into player names.
///
/// Lines are trimmed and blank lines dropped. Order is preserved and
/// duplicates are kept.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// An ordered list of at least `min_players` seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Validate a list of names.
    ///
    /// Names are trimmed and blanks dropped before counting. The minimum is
    /// never lower than 3.
    pub fn new<I, S>(names: I, min_players: usize) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        let required = min_players.max(MIN_PLAYERS);
        if names.len() < required {
            return Err(GameError::NotEnoughPlayers {
                found: names.len(),
                required,
            });
        }

        Ok(Self { names })
    }

    /// Display name of the player in `seat`.
    pub fn name(&self, seat: usize) -> Option<&str> {
        self.names.get(seat).map(String::as_str)
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no seats.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in seat order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
