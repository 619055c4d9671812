use super::*;

/// Tests that a partial update only touches the given fields.
///
/// Expected: Ok with first name changed, email and hash unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                first_name: Some("Renamed".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);

    Ok(())
}

/// Tests that a new hash replaces the stored one.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams::default(),
            Some("$2b$04$changed-hash".to_string()),
        )
        .await?;

    assert_eq!(updated.password_hash, "$2b$04$changed-hash");

    Ok(())
}

/// Tests that an empty update leaves the row as it was.
///
/// Expected: Ok with the user unchanged
#[tokio::test]
async fn empty_update_returns_unchanged_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(user.id, UpdateUserParams::default(), None)
        .await?;

    assert_eq!(updated.first_name, user.first_name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Expected: Err(RecordNotFound) for an unknown ID
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParams::default(), None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
