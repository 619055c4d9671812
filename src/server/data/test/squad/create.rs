use super::*;

/// Tests creating a squad player with optional measurements.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_squad_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let squad = SquadRepository::new(db)
        .create(CreateSquadParams {
            first_name: "Tom".to_string(),
            last_name: "Lock".to_string(),
            position: "Lock".to_string(),
            jersey_number: "4".to_string(),
            biography: "Lineout caller".to_string(),
            image: "tom.png".to_string(),
            weight: Some(118.5),
            height: None,
            date_of_birth: NaiveDate::from_ymd_opt(1998, 3, 14),
        })
        .await?;

    assert_eq!(squad.jersey_number, "4");
    assert_eq!(squad.weight, Some(118.5));
    assert_eq!(squad.height, None);
    assert_eq!(squad.date_of_birth, NaiveDate::from_ymd_opt(1998, 3, 14));

    Ok(())
}

/// Tests the unique jersey number constraint.
///
/// Expected: Err for a second player with the same number
#[tokio::test]
async fn rejects_duplicate_jersey_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_squad_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::squad::SquadFactory::new(db)
        .jersey_number("99")
        .build()
        .await?;
    let result = factory::squad::SquadFactory::new(db)
        .jersey_number("99")
        .build()
        .await;

    assert!(result.is_err());

    Ok(())
}
