//! The process-wide game state machine.
//!
//! ```text
//! NoSession --start(>= 3 names)--> AwaitingReveal(seat 0)
//! AwaitingReveal(p) --advance--> AwaitingReveal(next) | AllRevealed
//! AllRevealed --reveal--> impostor name
//! any state --start--> AwaitingReveal(seat 0)
//! any state --reset--> NoSession
//! ```
//!
//! There is exactly one [`Game`] per process and it holds at most one
//! [`Session`]. It is not per-client: callers sharing it share the session,
//! and the last writer wins.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::roster::{Roster, parse_names};
use crate::session::{Role, Session};

/// Name reported by [`Reveal::Unknown`].
pub const UNKNOWN_IMPOSTOR: &str = "Desconocido";

/// Read-only projection of the game for a front end to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View {
    /// No game in progress.
    NoSession,
    /// `player` is next to look at their card.
    AwaitingReveal {
        /// Seat of the player.
        seat: usize,
        /// Display name of the player.
        player: String,
        /// The card to show once the player uncovers it.
        role: Role,
    },
    /// Everyone has looked; `starter` opens the discussion.
    AllRevealed {
        /// Display name of the starting player.
        starter: String,
    },
}

/// Outcome of [`Game::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No game in progress; nothing happened.
    NoSession,
    /// The cursor moved to the next seat.
    Moved,
    /// The last seat has looked; the starter was drawn.
    Completed,
    /// Everyone had already looked; nothing happened.
    AlreadyComplete,
}

/// Outcome of [`Game::reveal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "impostor", content = "name", rename_all = "snake_case")]
pub enum Reveal {
    /// The impostor's display name.
    Impostor(String),
    /// No game in progress.
    Unknown,
}

impl Reveal {
    /// Name to display; the `Desconocido` sentinel when unknown.
    pub fn name(&self) -> &str {
        match self {
            Self::Impostor(name) => name,
            Self::Unknown => UNKNOWN_IMPOSTOR,
        }
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The single shared game.
pub struct Game {
    catalog: Catalog,
    config: GameConfig,
    rng: StdRng,
    session: Option<Session>,
}

impl Game {
    /// Create a game with no session in progress.
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                warn!(seed, "using a fixed RNG seed; the impostor is predictable");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            catalog,
            config,
            rng,
            session: None,
        }
    }

    /// The catalog secrets are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a game is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a new game, replacing any session in progress.
    ///
    /// Names are validated first: on error the previous session is kept.
    pub fn start<I, S>(&mut self, names: I) -> GameResult<&Session>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Roster::new(names, self.config.min_players)?;
        if self.session.is_some() {
            debug!("discarding previous session");
        }

        let session = Session::deal(roster, &self.catalog, &mut self.rng);
        info!(players = session.roster().len(), "game started");
        Ok(&*self.session.insert(session))
    }

    /// Start a new game from newline-separated names.
    pub fn start_from_text(&mut self, raw: &str) -> GameResult<&Session> {
        self.start(parse_names(raw))
    }

    /// What to show right now. Repeated calls without `advance` agree.
    pub fn view(&self) -> View {
        let Some(session) = &self.session else {
            return View::NoSession;
        };

        if session.is_complete() {
            return View::AllRevealed {
                starter: session.starter().unwrap_or_default().to_string(),
            };
        }

        let seat = session.cursor();
        View::AwaitingReveal {
            seat,
            player: session.roster().names()[seat].clone(),
            role: session.role_for(seat),
        }
    }

    /// Hand the device to the next player. A no-op without a session.
    pub fn advance(&mut self) -> Advance {
        match self.session.as_mut() {
            Some(session) => session.advance(&mut self.rng),
            None => Advance::NoSession,
        }
    }

    /// Who the impostor is. Does not end the session.
    pub fn reveal(&self) -> Reveal {
        match &self.session {
            Some(session) => {
                info!("impostor revealed");
                Reveal::Impostor(session.impostor().to_string())
            }
            None => Reveal::Unknown,
        }
    }

    /// Drop the session in progress.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("game reset");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Catalog::builtin(), GameConfig::default())
    }
}
