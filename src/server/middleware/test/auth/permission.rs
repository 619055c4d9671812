use super::*;

/// Expected: admin granted, plain user denied
#[test]
fn admin_permission_requires_admin_role() {
    assert!(Permission::Admin.check(&user(1, UserRole::Admin)).is_ok());

    let result = Permission::Admin.check(&user(2, UserRole::User));
    assert!(matches!(result, Err(AuthError::AccessDenied(2, _))));
}

/// Tests that ownership is not granted to admins.
///
/// Expected: owner granted, other users and admins denied
#[test]
fn owner_permission_matches_user_id_only() {
    assert!(Permission::Owner(5).check(&user(5, UserRole::User)).is_ok());
    assert!(Permission::Owner(5).check(&user(6, UserRole::User)).is_err());
    assert!(Permission::Owner(5).check(&user(6, UserRole::Admin)).is_err());
}

/// Expected: owner and admins granted, other users denied
#[test]
fn owner_or_admin_permission() {
    assert!(Permission::OwnerOrAdmin(5)
        .check(&user(5, UserRole::User))
        .is_ok());
    assert!(Permission::OwnerOrAdmin(5)
        .check(&user(6, UserRole::Admin))
        .is_ok());
    assert!(Permission::OwnerOrAdmin(5)
        .check(&user(6, UserRole::User))
        .is_err());
}
