//! Word/clue catalogs.
//!
//! Each game draws one [`SecretPair`] from a [`Catalog`]. The crew sees the
//! word, the impostor only sees the clue.

use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Built-in (word, clue) pairs.
pub const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("astronauta", "cohete"),
    ("chef", "cuchillo"),
    ("médico", "estetoscopio"),
    ("policía", "pistola"),
    ("profesor", "pizarra"),
    ("bombero", "manguera"),
    ("cantante", "micrófono"),
    ("pintor", "pincel"),
    ("detective", "lupa"),
    ("granjero", "tractor"),
    ("ninja", "shuriken"),
    ("pirata", "brújula"),
    ("espía", "disfraz"),
];

/// The secret of a game: a topic word and the hint given to the impostor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretPair {
    /// The word every crew member receives.
    pub word: String,
    /// The hint the impostor receives instead of the word.
    pub clue: String,
}

impl SecretPair {
    /// Create a new pair.
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

impl std::fmt::Display for SecretPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.word, self.clue)
    }
}

/// A non-empty, ordered list of secret pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    pairs: Vec<SecretPair>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and blank entries.
    pub fn new(pairs: Vec<SecretPair>) -> CatalogResult<Self> {
        if pairs.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = pairs
            .iter()
            .position(|p| p.word.trim().is_empty() || p.clue.trim().is_empty())
        {
            return Err(CatalogError::BlankEntry(index));
        }
        Ok(Self { pairs })
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            pairs: BUILTIN_PAIRS
                .iter()
                .map(|(word, clue)| SecretPair::new(*word, *clue))
                .collect(),
        }
    }

    /// Parse a catalog from a JSON array of `{ "word": .., "clue": .. }`.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let pairs: Vec<SecretPair> = serde_json::from_str(json)?;
        Self::new(pairs)
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Pick one pair uniformly at random.
    pub fn draw(&self, rng: &mut StdRng) -> &SecretPair {
        &self.pairs[rng.random_range(0..self.pairs.len())]
    }

    /// Whether the catalog declares this exact pair.
    pub fn contains(&self, pair: &SecretPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SecretPair> {
        self.pairs.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
