//! Routes and handlers.
//!
//! | Method | Path | Effect |
//! |---|---|---|
//! | GET | `/` | reset the game, show the setup form |
//! | POST | `/setup` | start a game from the `players` field |
//! | GET | `/show_role` | current player's card, or the all-ready screen |
//! | POST | `/next` | hand over to the next player |
//! | POST | `/reveal_impostor` | show the impostor |
//! | GET | `/health` | liveness probe |

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use imp_core::{Advance, Game, View};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{WebError, WebResult};
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct SetupForm {
    #[serde(default)]
    players: String,
}

/// Build the application router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/setup", post(setup))
        .route("/show_role", get(show_role))
        .route("/next", post(next_player))
        .route("/reveal_impostor", post(reveal_impostor))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config` and serve `game` until Ctrl-C.
pub async fn serve(config: ServerConfig, game: Game) -> WebResult<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(game)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    state.game().lock().await.reset();
    Html(pages::setup())
}

async fn setup(State(state): State<AppState>, Form(form): Form<SetupForm>) -> Response {
    let mut game = state.game().lock().await;
    match game.start_from_text(&form.players) {
        Ok(_) => Redirect::to("/show_role").into_response(),
        Err(err) => {
            warn!("rejected setup: {err}");
            (StatusCode::BAD_REQUEST, Html(pages::error(&err))).into_response()
        }
    }
}

async fn show_role(State(state): State<AppState>) -> Response {
    let view = state.game().lock().await.view();
    match view {
        View::NoSession => Redirect::to("/").into_response(),
        View::AwaitingReveal { player, role, .. } => Html(pages::role(&player, &role)).into_response(),
        View::AllRevealed { starter } => Html(pages::all_ready(&starter)).into_response(),
    }
}

async fn next_player(State(state): State<AppState>) -> Redirect {
    let step = state.game().lock().await.advance();
    if step == Advance::NoSession {
        debug!("next without a game in progress");
    }
    Redirect::to("/show_role")
}

async fn reveal_impostor(State(state): State<AppState>) -> Html<String> {
    let reveal = state.game().lock().await.reveal();
    Html(pages::reveal(&reveal))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use imp_core::{Catalog, GameConfig, Role};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Game::new(
            Catalog::builtin(),
            GameConfig::default().with_seed(42),
        ))
    }

    async fn send(state: &AppState, method: &str, uri: &str, form: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        router(state.clone())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn home_renders_form_and_resets() {
        let state = test_state();
        state.game().lock().await.start(["Ana", "Bea", "Caz"]).unwrap();

        let response = send(&state, "GET", "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#"action="/setup""#));
        assert!(!state.game().lock().await.is_active());
    }

    #[tokio::test]
    async fn setup_redirects_to_role() {
        let state = test_state();
        let response = send(&state, "POST", "/setup", Some("players=Ana%0ABea%0ACaz")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/show_role");
        assert!(state.game().lock().await.is_active());
    }

    #[tokio::test]
    async fn setup_with_two_players_is_bad_request() {
        let state = test_state();
        let response = send(&state, "POST", "/setup", Some("players=Ana%0A%0A+%0ABea")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Se necesitan al menos 3 jugadores."));
        assert!(!state.game().lock().await.is_active());
    }

    #[tokio::test]
    async fn setup_without_field_is_bad_request() {
        let state = test_state();
        let response = send(&state, "POST", "/setup", Some("")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn show_role_without_game_redirects_home() {
        let state = test_state();
        let response = send(&state, "GET", "/show_role", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn next_without_game_is_harmless() {
        let state = test_state();
        let response = send(&state, "POST", "/next", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/show_role");
        assert!(!state.game().lock().await.is_active());
    }

    #[tokio::test]
    async fn reveal_without_game_is_unknown() {
        let state = test_state();
        let response = send(&state, "POST", "/reveal_impostor", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Desconocido!"));
    }

    #[tokio::test]
    async fn full_round() {
        let state = test_state();
        send(&state, "POST", "/setup", Some("players=Ana%0ABea%0ACaz")).await;
        let (impostor, secret) = {
            let game = state.game().lock().await;
            let session = game.session().unwrap();
            (session.impostor().to_string(), session.secret().clone())
        };

        for name in ["Ana", "Bea", "Caz"] {
            let html = body_text(send(&state, "GET", "/show_role", None).await).await;
            assert!(html.contains(&format!(r#"<div class="player-name">{name}</div>"#)));
            let shown_clue = html.contains(&format!("<strong>{}</strong>", secret.clue));
            let shown_word = html.contains(&format!("<strong>{}</strong>", secret.word));
            assert_eq!(shown_clue, name == impostor);
            assert_eq!(shown_word, name != impostor);

            let response = send(&state, "POST", "/next", None).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        let html = body_text(send(&state, "GET", "/show_role", None).await).await;
        assert!(html.contains("¡Todos listos!"));
        assert!(html.contains(r#"action="/reveal_impostor""#));
        let again = body_text(send(&state, "GET", "/show_role", None).await).await;
        assert_eq!(html, again);

        let html = body_text(send(&state, "POST", "/reveal_impostor", None).await).await;
        assert!(html.contains(&format!("{impostor}!")));
        assert!(state.game().lock().await.is_active());
    }

    #[tokio::test]
    async fn role_page_matches_view() {
        let state = test_state();
        state.game().lock().await.start(["Ana", "Bea", "Caz"]).unwrap();
        let view = state.game().lock().await.view();
        let View::AwaitingReveal { role, .. } = view else {
            panic!("expected a role view");
        };

        let html = body_text(send(&state, "GET", "/show_role", None).await).await;
        match role {
            Role::Crew { word } => assert!(html.contains(&word)),
            Role::Impostor { clue } => assert!(html.contains(&clue)),
        }
    }

    #[tokio::test]
    async fn health_check() {
        let state = test_state();
        let response = send(&state, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}
