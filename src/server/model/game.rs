//! Parameter models for game data operations.
//!
//! These models sit between the API DTOs and the SeaORM entity. DTOs are turned into params
//! by the service, params are turned into active models for the repository, and stored
//! entities come back out as `GameParam` before becoming a `GameDto`.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use sea_orm::ActiveValue;

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::error::AppError,
};

/// Number of decimal places stored for prices.
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price in cents, the limit of a `DECIMAL(18, 2)` value.
pub const MAX_PRICE_CENTS: i64 = 999_999_999_999_999_999;

/// Largest storable price, `9999999999999999.99`.
pub fn max_price() -> Decimal {
    Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE)
}

/// Rounds a price to the stored scale, midpoint away from zero.
pub fn normalize_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a price to the exact number of cents stored in the database.
///
/// # Returns
/// - `Ok(i64)` - Price rounded to two places, in cents
/// - `Err(AppError::BadRequest)` - Price is beyond the storable range
pub fn price_to_cents(price: Decimal) -> Result<i64, AppError> {
    normalize_price(price)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .filter(|cents| cents.unsigned_abs() <= MAX_PRICE_CENTS.unsigned_abs())
        .ok_or_else(|| {
            AppError::BadRequest(format!("Price cannot exceed {}", max_price()))
        })
}

/// Converts stored cents back to a price with exactly two decimal places.
pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_SCALE)
}

/// Represents a game with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct GameParam {
    /// Store-assigned identifier.
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub age_rating: String,
    pub price: Decimal,
    pub description: String,
    pub author: String,
}

impl GameParam {
    /// Converts an entity model to a game param.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into the controller layer.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre: entity.genre,
            age_rating: entity.age_rating,
            price: cents_to_price(entity.price_cents),
            description: entity.description,
            author: entity.author,
        }
    }

    /// Converts the game param to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            genre: self.genre,
            age_rating: self.age_rating,
            price: self.price,
            description: self.description,
            author: self.author,
        }
    }
}

/// Parameters for creating a new game. The store assigns the ID.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub name: String,
    pub genre: String,
    pub age_rating: String,
    pub price_cents: i64,
    pub description: String,
    pub author: String,
}

impl CreateGameParam {
    pub fn from_dto(dto: CreateGameDto) -> Result<Self, AppError> {
        Ok(Self {
            price_cents: price_to_cents(dto.price)?,
            name: dto.name,
            genre: dto.genre,
            age_rating: dto.age_rating,
            description: dto.description,
            author: dto.author,
        })
    }

    /// Builds an insertable active model with the ID left unset.
    pub fn into_active_model(self) -> entity::game::ActiveModel {
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            genre: ActiveValue::Set(self.genre),
            age_rating: ActiveValue::Set(self.age_rating),
            price_cents: ActiveValue::Set(self.price_cents),
            description: ActiveValue::Set(self.description),
            author: ActiveValue::Set(self.author),
        }
    }
}

/// Parameters for replacing every writable field of an existing game.
#[derive(Debug, Clone)]
pub struct UpdateGameParam {
    /// ID of the game to update.
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub age_rating: String,
    pub price_cents: i64,
    pub description: String,
    pub author: String,
}

impl UpdateGameParam {
    pub fn from_dto(id: i32, dto: UpdateGameDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            price_cents: price_to_cents(dto.price)?,
            name: dto.name,
            genre: dto.genre,
            age_rating: dto.age_rating,
            description: dto.description,
            author: dto.author,
        })
    }

    /// Overwrites every field of the stored game, keeping its ID.
    ///
    /// Empty values replace existing ones; there is no partial-update merging.
    pub fn apply_to(self, existing: entity::game::Model) -> entity::game::ActiveModel {
        let mut active_model: entity::game::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(self.name);
        active_model.genre = ActiveValue::Set(self.genre);
        active_model.age_rating = ActiveValue::Set(self.age_rating);
        active_model.price_cents = ActiveValue::Set(self.price_cents);
        active_model.description = ActiveValue::Set(self.description);
        active_model.author = ActiveValue::Set(self.author);
        active_model
    }
}
