use std::path::PathBuf;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Fewer valid player names than the game needs.
    #[error("se necesitan al menos {required} jugadores (hay {found})")]
    NotEnoughPlayers {
        /// Number of valid names after trimming and dropping blanks.
        found: usize,
        /// Minimum number of players required.
        required: usize,
    },
}

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no entries.
    #[error("el catálogo está vacío")]
    Empty,

    /// An entry has a blank word or clue.
    #[error("la entrada {0} del catálogo tiene la palabra o la pista vacía")]
    BlankEntry(usize),

    /// The catalog file could not be read.
    #[error("no se pudo leer el catálogo {path}: {source}")]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The catalog is not a valid JSON array of `{ "word", "clue" }` objects.
    #[error("JSON de catálogo no válido: {0}")]
    Parse(#[from] serde_json::Error),
}
