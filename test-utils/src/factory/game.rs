//! Game factory for creating test game entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .name("Custom Game")
///     .genre("Strategy")
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    genre: String,
    age_rating: String,
    price_cents: i64,
    description: String,
    author: String,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {n}"` where n is auto-incremented
    /// - genre: `"Action"`
    /// - age_rating: `"M"`
    /// - price_cents: `5999`
    /// - description: `"Test description"`
    /// - author: `"Test Studio"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Game {}", id),
            genre: "Action".to_string(),
            age_rating: "M".to_string(),
            price_cents: 5999,
            description: "Test description".to_string(),
            author: "Test Studio".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn age_rating(mut self, age_rating: impl Into<String>) -> Self {
        self.age_rating = age_rating.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            genre: ActiveValue::Set(self.genre),
            age_rating: ActiveValue::Set(self.age_rating),
            price_cents: ActiveValue::Set(self.price_cents),
            description: ActiveValue::Set(self.description),
            author: ActiveValue::Set(self.author),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
