//! A dealt game session.
//!
//! A [`Session`] only exists fully populated: roster, secret pair, impostor
//! seat and cursor are all set together by [`Session::deal`].

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, SecretPair};
use crate::game::Advance;
use crate::roster::Roster;

/// What a player sees when they uncover their card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// A regular player; knows the secret word.
    Crew {
        /// The secret word.
        word: String,
    },
    /// The impostor; only knows the clue.
    Impostor {
        /// The clue.
        clue: String,
    },
}

impl Role {
    /// Whether this is the impostor's card.
    pub fn is_impostor(&self) -> bool {
        matches!(self, Self::Impostor { .. })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crew { word } => write!(f, "Tu palabra secreta es: {word}"),
            Self::Impostor { clue } => {
                write!(f, "¡Eres el IMPOSTOR! Tu pista es: {clue}")
            }
        }
    }
}

/// One dealt game.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    secret: SecretPair,
    impostor: usize,
    cursor: usize,
    starter: Option<usize>,
}

impl Session {
    /// Draw a secret pair and an impostor seat, and point the cursor at seat 0.
    pub fn deal(roster: Roster, catalog: &Catalog, rng: &mut StdRng) -> Self {
        let secret = catalog.draw(rng).clone();
        let impostor = rng.random_range(0..roster.len());
        debug!(players = roster.len(), "dealt new session");

        Self {
            roster,
            secret,
            impostor,
            cursor: 0,
            starter: None,
        }
    }

    /// The seated players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The drawn word/clue pair.
    pub fn secret(&self) -> &SecretPair {
        &self.secret
    }

    /// Seat of the impostor.
    pub fn impostor_seat(&self) -> usize {
        self.impostor
    }

    /// Display name of the impostor.
    pub fn impostor(&self) -> &str {
        &self.roster.names()[self.impostor]
    }

    /// Seat whose turn it is to look, or `roster.len()` once everyone has.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every seat has viewed its role.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.roster.len()
    }

    /// The card dealt to `seat`.
    pub fn role_for(&self, seat: usize) -> Role {
        if seat == self.impostor {
            Role::Impostor {
                clue: self.secret.clue.clone(),
            }
        } else {
            Role::Crew {
                word: self.secret.word.clone(),
            }
        }
    }

    /// The player who opens the discussion, once everyone has looked.
    pub fn starter(&self) -> Option<&str> {
        self.starter.and_then(|seat| self.roster.name(seat))
    }

    /// Move to the next seat.
    ///
    /// The cursor saturates at `roster.len()`. The starter is drawn once, on
    /// the step that completes the round.
    pub(crate) fn advance(&mut self, rng: &mut StdRng) -> Advance {
        if self.is_complete() {
            return Advance::AlreadyComplete;
        }

        self.cursor += 1;
        if !self.is_complete() {
            return Advance::Moved;
        }

        let starter = rng.random_range(0..self.roster.len());
        self.starter = Some(starter);
        debug!(starter, "all roles viewed");
        Advance::Completed
    }
}
