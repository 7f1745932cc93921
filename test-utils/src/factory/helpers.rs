//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` games with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of games to insert
///
/// # Returns
/// - `Ok(Vec<entity::game::Model>)` - Created games in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_games(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::game::Model>, DbErr> {
    let mut games = Vec::with_capacity(count);
    for _ in 0..count {
        games.push(crate::factory::game::create_game(db).await?);
    }
    Ok(games)
}
