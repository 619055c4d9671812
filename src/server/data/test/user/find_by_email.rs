use super::*;

/// Expected: Some for a stored email, None otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("member@club.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("member@club.test").await?;
    let missing = repo.find_by_email("nobody@club.test").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(missing.is_none());

    Ok(())
}
