use entity::prelude::Squad;

use super::*;

fn squad_payload() -> Value {
    json!({
        "first_name": "Tom",
        "last_name": "Lock",
        "position": "Lock",
        "jersey_number": 4,
        "biography": "Lineout caller",
        "image": "tom.png",
        "weight": "118.5"
    })
}

/// Tests that a member cannot add squad players.
///
/// Expected: 400 access forbidden and no row
#[tokio::test]
async fn non_admin_cannot_create_squad() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let member = factory::create_user(db).await?;

    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/squad/create",
        Some(&token_for(member.id)),
        Some(squad_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Access forbidden"));
    assert_eq!(Squad::find().count(db).await?, 0);

    Ok(())
}

/// Expected: 401 without a token
#[tokio::test]
async fn create_squad_requires_token() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(
        app(db, None),
        Method::POST,
        "/api/v1/squad/create",
        None,
        Some(squad_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(Squad::find().count(db).await?, 0);

    Ok(())
}

/// Tests admin creation with loosely typed numbers.
///
/// Expected: 201, jersey number stored as text and weight parsed
#[tokio::test]
async fn admin_creates_squad() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let (status, body) = send(
        app(db, None),
        Method::POST,
        "/api/v1/squad/create",
        Some(&token_for(admin.id)),
        Some(squad_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["squad"]["jersey_number"], "4");
    assert_eq!(body["squad"]["weight"], 118.5);

    let (status, list) = send(
        app(db, None),
        Method::GET,
        "/api/v1/squad/squads",
        Some(&token_for(admin.id)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["squads"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Expected: 404 for the per-squad statistics of an unknown player
#[tokio::test]
async fn statistics_of_missing_squad_not_found() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let member = factory::create_user(db).await?;

    let (status, body) = send(
        app(db, None),
        Method::GET,
        "/api/v1/playerstatistics/squad/404",
        Some(&token_for(member.id)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Squad not found");

    Ok(())
}
