use super::*;

/// Tests deleting a game.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn removes_game_from_database() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let id = game.id;

    let repo = GameRepository::new(db);
    repo.delete(game).await?;

    let stored = Game::find_by_id(id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that deleting one game leaves the others in place.
///
/// Expected: Ok with count decreased by one
#[tokio::test]
async fn only_removes_target_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::helpers::create_games(db, 2).await?;
    let kept_id = games[1].id;

    let repo = GameRepository::new(db);
    repo.delete(games[0].clone()).await?;

    assert_eq!(Game::find().count(db).await?, 1);
    assert!(Game::find_by_id(kept_id).one(db).await?.is_some());

    Ok(())
}
