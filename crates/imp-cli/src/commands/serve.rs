use imp_web::ServerConfig;
use tracing::info;

use crate::GameArgs;

pub fn run(bind: &str, port: u16, args: &GameArgs) -> Result<(), String> {
    let game = super::build_game(args)?;
    let config = ServerConfig::default().with_bind(bind).with_port(port);

    info!(
        "impostor v{} ({} word pairs)",
        env!("CARGO_PKG_VERSION"),
        game.catalog().len()
    );

    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    runtime
        .block_on(imp_web::serve(config, game))
        .map_err(|e| e.to_string())
}
