use super::*;

/// Tests updating a single field while resending the others unchanged.
///
/// Expected: Ok with only the changed field differing
#[tokio::test]
async fn updates_only_changed_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let created = service.create(create_dto("Original")).await?;

    let dto = UpdateGameDto {
        name: created.name.clone(),
        genre: "RPG".to_string(),
        age_rating: created.age_rating.clone(),
        price: created.price,
        description: created.description.clone(),
        author: created.author.clone(),
    };
    let updated = service.update(created.id, dto).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.genre, "RPG");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.age_rating, created.age_rating);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.author, created.author);

    assert_eq!(service.get_by_id(created.id).await?, updated);

    Ok(())
}

/// Tests that omitted fields overwrite stored values.
///
/// There is no partial-update merging: empty values replace non-empty ones.
///
/// Expected: Ok with optional fields cleared
#[tokio::test]
async fn overwrites_omitted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let dto = UpdateGameDto {
        name: "Renamed".to_string(),
        ..Default::default()
    };
    let updated = GameService::new(db).update(game.id, dto).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.genre, "");
    assert_eq!(updated.age_rating, "");
    assert_eq!(updated.price, Decimal::ZERO);
    assert_eq!(updated.description, "");
    assert_eq!(updated.author, "");

    let stored = Game::find_by_id(game.id).one(db).await?.unwrap();
    assert_eq!(stored.genre, "");
    assert_eq!(stored.author, "");

    Ok(())
}

/// Tests updating an unknown game.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_with_not_found_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = UpdateGameDto {
        name: "Ghost".to_string(),
        ..Default::default()
    };
    let result = GameService::new(db).update(999, dto).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(Game::find().count(db).await?, 0);

    Ok(())
}

/// Tests that non-positive IDs are rejected before the store is touched.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_id_before_store_access() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [0, -5] {
        let dto = UpdateGameDto {
            name: "Game".to_string(),
            ..Default::default()
        };
        let result = GameService::new(db).update(id, dto).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
