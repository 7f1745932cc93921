//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::create_game(&db).await?;
//!
//!     // Create several at once
//!     let games = factory::helpers::create_games(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::game::GameFactory;
//!
//! let game = GameFactory::new(&db)
//!     .name("Custom Game")
//!     .genre("RPG")
//!     .price_cents(4999)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;

pub use game::create_game;
