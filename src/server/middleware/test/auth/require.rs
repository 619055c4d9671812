use super::*;

/// Tests requiring admin for an admin caller.
///
/// Expected: Ok with the loaded user
#[tokio::test]
async fn grants_admin_to_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let identity = BearerIdentity { user_id: admin.id };

    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, admin.id);

    Ok(())
}

/// Expected: Err(AccessDenied) for a plain user
#[tokio::test]
async fn denies_admin_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let identity = BearerIdentity { user_id: member.id };

    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an empty permission list only requires the user to exist.
///
/// Expected: Ok for a plain user
#[tokio::test]
async fn empty_permissions_only_load_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let identity = BearerIdentity { user_id: member.id };

    assert!(AuthGuard::new(db, &identity).require(&[]).await.is_ok());

    Ok(())
}

/// Tests a token naming a deleted user.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_user_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(UserEntity).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let identity = BearerIdentity { user_id: 42 };

    let result = AuthGuard::new(db, &identity).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(42)))
    ));

    Ok(())
}
