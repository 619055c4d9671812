use super::*;

/// Tests listing statistics of one squad player.
///
/// Expected: Ok with only that player's rows
#[tokio::test]
async fn gets_rows_of_one_squad() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_squad(db).await?;
    let other = factory::create_squad(db).await?;
    factory::create_player_statistic(db, player.id, 3).await?;
    factory::create_player_statistic(db, player.id, 5).await?;
    factory::create_player_statistic(db, other.id, 7).await?;

    let rows = PlayerStatisticRepository::new(db)
        .get_by_squad_id(player.id)
        .await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.squad_id == player.id));

    Ok(())
}

/// Tests the bulk counter edit.
///
/// Expected: every row of the player updated, other players untouched
#[tokio::test]
async fn updates_every_row_of_squad() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_squad(db).await?;
    let other = factory::create_squad(db).await?;
    factory::create_player_statistic(db, player.id, 3).await?;
    factory::create_player_statistic(db, player.id, 5).await?;
    let untouched = factory::create_player_statistic(db, other.id, 7).await?;

    let repo = PlayerStatisticRepository::new(db);
    let rows = repo
        .update_by_squad_id(
            player.id,
            UpdatePlayerStatisticParams {
                red_cards: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.red_cards == 1));

    let other_row = repo.find_by_id(untouched.id).await?.unwrap();
    assert_eq!(other_row.red_cards, 0);
    assert_eq!(other_row.matches_played, 7);

    Ok(())
}

/// Tests the bulk delete.
///
/// Expected: number of removed rows returned, other players untouched
#[tokio::test]
async fn deletes_every_row_of_squad() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_squad(db).await?;
    let other = factory::create_squad(db).await?;
    factory::create_player_statistic(db, player.id, 3).await?;
    factory::create_player_statistic(db, player.id, 5).await?;
    factory::create_player_statistic(db, other.id, 7).await?;

    let removed = PlayerStatisticRepository::new(db)
        .delete_by_squad_id(player.id)
        .await?;

    assert_eq!(removed, 2);
    assert_eq!(PlayerStatistic::find().count(db).await?, 1);

    Ok(())
}
