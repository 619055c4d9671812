use super::*;

/// Tests creating a user stores the hash, never the plain password.
///
/// Expected: Ok with the hash persisted and the role stored as text
#[tokio::test]
async fn creates_user_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(register_params("jane@club.test"), "$2b$04$stored-hash".to_string())
        .await?;

    assert_eq!(user.email, "jane@club.test");
    assert_eq!(user.password_hash, "$2b$04$stored-hash");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.join_date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.role, "user");

    Ok(())
}

/// Tests that the unique email constraint rejects a second account.
///
/// Expected: Err and only one row stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(register_params("dup@club.test"), "h".to_string())
        .await?;
    let result = repo
        .create(register_params("dup@club.test"), "h".to_string())
        .await;

    assert!(result.is_err());
    assert_eq!(User::find().count(db).await?, 1);

    Ok(())
}
