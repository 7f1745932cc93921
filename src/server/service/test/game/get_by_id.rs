use super::*;

/// Tests getting a stored game.
///
/// Expected: Ok with every field mapped
#[tokio::test]
async fn returns_game_when_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .name("Test Game")
        .genre("Action")
        .age_rating("M")
        .price_cents(5999)
        .description("Test description")
        .author("Test Studio")
        .build()
        .await?;

    let result = GameService::new(db).get_by_id(game.id).await?;

    assert_eq!(result.id, game.id);
    assert_eq!(result.name, "Test Game");
    assert_eq!(result.genre, "Action");
    assert_eq!(result.age_rating, "M");
    assert_eq!(result.price, Decimal::new(5999, 2));
    assert_eq!(result.description, "Test description");
    assert_eq!(result.author, "Test Studio");

    Ok(())
}

/// Tests that repeated reads return identical output.
///
/// Expected: Ok with equal DTOs
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let service = GameService::new(db);

    let first = service.get_by_id(game.id).await?;
    let second = service.get_by_id(game.id).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests getting an unknown game.
///
/// Expected: Err(NotFound) naming the resource and the ID
#[tokio::test]
async fn fails_with_not_found_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db).get_by_id(999).await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert!(message.contains("Game"));
            assert!(message.contains("999"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests that non-positive IDs are rejected before the store is touched.
///
/// The database has no `games` table, so any store access would fail with a database error.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_id_before_store_access() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [0, -1, i32::MIN] {
        let result = GameService::new(db).get_by_id(id).await;

        match result {
            Err(AppError::BadRequest(message)) => assert!(message.contains("positive value")),
            other => panic!("expected BadRequest for {}, got {:?}", id, other),
        }
    }

    Ok(())
}
