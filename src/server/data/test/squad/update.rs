use super::*;

/// Tests that a partial update keeps the fields it does not name.
///
/// Expected: Ok with position changed and weight kept
#[tokio::test]
async fn updates_position_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::squad::SquadFactory::new(db)
        .weight(90.0)
        .build()
        .await?;

    let updated = SquadRepository::new(db)
        .update(
            player.id,
            UpdateSquadParams {
                position: Some("Wing".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.position, "Wing");
    assert_eq!(updated.weight, Some(90.0));
    assert_eq!(updated.first_name, player.first_name);

    Ok(())
}
