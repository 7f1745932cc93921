use sea_orm::DatabaseConnection;

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::{CreateGameParam, GameParam, UpdateGameParam},
    },
};

/// Resource name used in not-found messages.
const GAME_RESOURCE: &str = "Game";

/// Message returned for any game ID that is not a positive integer.
pub const INVALID_GAME_ID_MESSAGE: &str = "Game ID must be a positive value.";

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game, ordered by ID.
    pub async fn list_all(&self) -> Result<Vec<GameDto>, AppError> {
        let repo = GameRepository::new(self.db);

        let mut games = repo.get_all().await?;
        games.sort_by_key(|game| game.id);

        Ok(games
            .into_iter()
            .map(|game| GameParam::from_entity(game).into_dto())
            .collect())
    }

    /// Gets a single game.
    ///
    /// # Returns
    /// - `Ok(GameDto)` - The stored game
    /// - `Err(AppError::BadRequest)` - `id` is not positive
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<GameDto, AppError> {
        ensure_positive_id(id)?;

        let game = GameRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(GAME_RESOURCE, id))?;

        Ok(GameParam::from_entity(game).into_dto())
    }

    /// Creates a new game. Field validation has already happened at the request boundary.
    pub async fn create(&self, dto: CreateGameDto) -> Result<GameDto, AppError> {
        let repo = GameRepository::new(self.db);

        let game = repo
            .add(CreateGameParam::from_dto(dto)?.into_active_model())
            .await?;

        tracing::info!("Created game with ID: {}", game.id);

        Ok(GameParam::from_entity(game).into_dto())
    }

    /// Replaces every writable field of an existing game.
    ///
    /// # Returns
    /// - `Ok(GameDto)` - The game as stored after the update
    /// - `Err(AppError::BadRequest)` - `id` is not positive
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, dto: UpdateGameDto) -> Result<GameDto, AppError> {
        ensure_positive_id(id)?;

        let repo = GameRepository::new(self.db);
        let param = UpdateGameParam::from_dto(id, dto)?;

        let existing = repo
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::not_found(GAME_RESOURCE, id))?;

        let game = repo.update(param.apply_to(existing)).await?;

        tracing::info!("Updated game with ID: {}", id);

        Ok(GameParam::from_entity(game).into_dto())
    }

    /// Deletes a game.
    ///
    /// # Returns
    /// - `Ok(())` - The game was removed
    /// - `Err(AppError::BadRequest)` - `id` is not positive
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        ensure_positive_id(id)?;

        let repo = GameRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(GAME_RESOURCE, id))?;

        repo.delete(existing).await?;

        tracing::info!("Deleted game with ID: {}", id);

        Ok(())
    }
}

/// Rejects non-positive IDs before any store access.
fn ensure_positive_id(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(INVALID_GAME_ID_MESSAGE.to_string()));
    }

    Ok(())
}
