use axum::{routing::get, Json, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        controller::game,
        middleware::error::{handle_panic, method_not_allowed, route_not_found},
        state::AppState,
    },
};

/// Path the OpenAPI document is served at in development.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Games API", description = "CRUD management of a game catalogue"),
    paths(
        game::get_games,
        game::get_game,
        game::create_game,
        game::update_game,
        game::delete_game,
    ),
    components(schemas(GameDto, CreateGameDto, UpdateGameDto, ErrorDto)),
    tags((name = "game", description = "Game catalogue endpoints"))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `state` - Shared application state
/// - `expose_openapi` - Serve the OpenAPI document at `/openapi/v1.json`
pub fn router(state: AppState, expose_openapi: bool) -> Router {
    let mut router = Router::new()
        .route("/games", get(game::get_games).post(game::create_game))
        .route(
            "/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        );

    if expose_openapi {
        router = router.route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }));
    }

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
