pub mod play;
pub mod serve;
pub mod words;

use std::path::Path;

use imp_core::{Catalog, Game, GameConfig};

use crate::GameArgs;

/// Load a catalog file, or the built-in catalog when none is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::load(path).map_err(|e| e.to_string()),
        None => Ok(Catalog::builtin()),
    }
}

/// Build a game from the shared command-line options.
fn build_game(args: &GameArgs) -> Result<Game, String> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut config = GameConfig::default().with_min_players(args.min_players);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(Game::new(catalog, config))
}
