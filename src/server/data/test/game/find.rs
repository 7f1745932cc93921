use super::*;

/// Tests finding games by a column condition.
///
/// Expected: Ok with only the matching games
#[tokio::test]
async fn returns_matching_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .name("Action Game")
        .genre("Action")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .name("RPG Game")
        .genre("RPG")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .name("Another Action")
        .genre("Action")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let result = repo
        .find(Condition::all().add(entity::game::Column::Genre.eq("Action")))
        .await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|g| g.genre == "Action"));

    Ok(())
}

/// Tests finding games when nothing matches.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db).genre("Action").build().await?;

    let repo = GameRepository::new(db);
    let result = repo
        .find(Condition::all().add(entity::game::Column::Genre.eq("RPG")))
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests combining conditions across columns.
///
/// Expected: Ok with games matching both conditions
#[tokio::test]
async fn combines_conditions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .genre("Action")
        .price_cents(1999)
        .build()
        .await?;
    let expensive = factory::game::GameFactory::new(db)
        .genre("Action")
        .price_cents(6999)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let result = repo
        .find(
            Condition::all()
                .add(entity::game::Column::Genre.eq("Action"))
                .add(entity::game::Column::PriceCents.gt(5000)),
        )
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, expensive.id);

    Ok(())
}
