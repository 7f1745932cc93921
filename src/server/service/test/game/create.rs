use super::*;

/// Tests creating a game and reading it back.
///
/// Expected: Ok with an assigned ID and identical fields on read
#[tokio::test]
async fn creates_game_and_round_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let created = service.create(create_dto("Game 1")).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Game 1");
    assert_eq!(created.price, Decimal::new(5999, 2));

    let fetched = service.get_by_id(created.id).await?;
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests that the first game in an empty store gets ID 1.
///
/// Expected: Ok with id 1
#[tokio::test]
async fn assigns_first_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = GameService::new(db).create(create_dto("Game 1")).await?;

    assert_eq!(created.id, 1);

    Ok(())
}

/// Tests that prices are stored at two decimal places.
///
/// Expected: Ok with the price rounded
#[tokio::test]
async fn rounds_price_to_two_places() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = CreateGameDto {
        price: Decimal::new(19999, 3),
        ..create_dto("Rounded")
    };
    let created = GameService::new(db).create(dto).await?;

    assert_eq!(created.price, Decimal::new(2000, 2));

    Ok(())
}

/// Tests that a price with sixteen integer digits is stored exactly.
///
/// Expected: Ok with the exact price on create and on read
#[tokio::test]
async fn round_trips_large_price_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let price: Decimal = "1234567890123456.78".parse().unwrap();
    let dto = CreateGameDto {
        price,
        ..create_dto("Big")
    };
    let service = GameService::new(db);
    let created = service.create(dto).await?;
    let fetched = service.get_by_id(created.id).await?;

    assert_eq!(created.price, price);
    assert_eq!(fetched.price.to_string(), "1234567890123456.78");

    Ok(())
}

/// Tests creating a game priced beyond the storable range.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_price_beyond_storable_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = CreateGameDto {
        price: Decimal::new(10_000_000_000_000_000, 0),
        ..create_dto("Huge")
    };
    let result = GameService::new(db).create(dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Game::find().count(db).await?, 0);

    Ok(())
}

/// Tests that empty optional fields are stored as empty strings.
///
/// Expected: Ok with empty fields preserved
#[tokio::test]
async fn stores_empty_optional_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = CreateGameDto {
        name: "Minimal".to_string(),
        ..Default::default()
    };
    let created = GameService::new(db).create(dto).await?;

    assert_eq!(created.genre, "");
    assert_eq!(created.author, "");
    assert_eq!(created.price, Decimal::ZERO);
    assert_eq!(Game::find().count(db).await?, 1);

    Ok(())
}
