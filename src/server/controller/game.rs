use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        controller::param::{GameId, ValidatedJson},
        error::AppError,
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get every game.
///
/// # Returns
/// - `200 OK` - All stored games ordered by ID, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Get a game by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID from the path, already checked to be a positive integer
///
/// # Returns
/// - `200 OK` - The game
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    GameId(id): GameId,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Create a new game.
///
/// The store assigns the ID. The response carries a `Location` header pointing at the new
/// resource.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game data, already validated
///
/// # Returns
/// - `201 Created` - Successfully created game
/// - `400 Bad Request` - Malformed JSON or a field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto,
            headers(("Location" = String, description = "Path of the created game"))),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).create(payload).await?;
    let location = format!("/games/{}", game.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(game)))
}

/// Update a game.
///
/// Every writable field is replaced by the request body, including empty values.
///
/// # Returns
/// - `200 OK` - The game as stored after the update
/// - `400 Bad Request` - Invalid ID, malformed JSON or a field failed validation
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game ID or game data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    GameId(id): GameId,
    ValidatedJson(payload): ValidatedJson<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Delete a game.
///
/// # Returns
/// - `204 No Content` - Successfully deleted game
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted game"),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    GameId(id): GameId,
) -> Result<impl IntoResponse, AppError> {
    GameService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
