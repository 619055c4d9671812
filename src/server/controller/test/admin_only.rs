use entity::prelude::{Event, PlayerStatistic, Squad};

use super::*;

/// Tests every admin-only mutation of events, squads and player statistics with a member
/// token.
///
/// Expected: 400 access forbidden for each and every row unchanged
#[tokio::test]
async fn member_cannot_mutate_admin_resources() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let member = factory::create_user(db).await?;
    let event = factory::create_event(db).await?;
    let squad = factory::create_squad(db).await?;
    let statistic = factory::create_player_statistic(db, squad.id, 3).await?;
    let token = token_for(member.id);

    let attempts = [
        (
            Method::POST,
            "/api/v1/event/create".to_string(),
            Some(json!({
                "name": "Derby",
                "description": "Home fixture",
                "date": "2025-06-01 15:00:00",
                "location": "Club Ground"
            })),
        ),
        (
            Method::PUT,
            format!("/api/v1/event/edit/{}", event.id),
            Some(json!({"location": "Away"})),
        ),
        (Method::DELETE, format!("/api/v1/event/delete/{}", event.id), None),
        (
            Method::PATCH,
            format!("/api/v1/squad/edit/{}", squad.id),
            Some(json!({"position": "Wing"})),
        ),
        (Method::DELETE, format!("/api/v1/squad/delete/{}", squad.id), None),
        (
            Method::POST,
            "/api/v1/playerstatistics/create".to_string(),
            Some(json!({"squad_id": squad.id, "matches_played": 1})),
        ),
        (
            Method::PUT,
            format!("/api/v1/playerstatistics/edit/{}", statistic.id),
            Some(json!({"tries_scored": 9})),
        ),
        (
            Method::PUT,
            format!("/api/v1/playerstatistics/edit/squad/{}", squad.id),
            Some(json!({"red_cards": 2})),
        ),
        (
            Method::DELETE,
            format!("/api/v1/playerstatistics/delete/{}", statistic.id),
            None,
        ),
        (
            Method::DELETE,
            format!("/api/v1/playerstatistics/delete/squad/{}", squad.id),
            None,
        ),
    ];

    for (method, uri, body) in attempts {
        let (status, response) = send(app(db, None), method, &uri, Some(&token), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(
            response["error"]
                .as_str()
                .unwrap()
                .starts_with("Access forbidden"),
            "{}",
            uri
        );
    }

    assert_eq!(Event::find().all(db).await?, vec![event]);
    assert_eq!(Squad::find().all(db).await?, vec![squad]);
    assert_eq!(PlayerStatistic::find().all(db).await?, vec![statistic]);

    Ok(())
}

/// Tests the same squad mutations with an admin token.
///
/// Expected: edit applied, delete removes the player and its statistics
#[tokio::test]
async fn admin_edits_and_deletes_squad() -> Result<(), DbErr> {
    let test = club_db().await;
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let squad = factory::create_squad(db).await?;
    factory::create_player_statistic(db, squad.id, 3).await?;
    let token = token_for(admin.id);

    let (status, edited) = send(
        app(db, None),
        Method::PATCH,
        &format!("/api/v1/squad/edit/{}", squad.id),
        Some(&token),
        Some(json!({"position": "Wing"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["squad"]["position"], "Wing");
    assert_eq!(edited["squad"]["first_name"], squad.first_name);

    let (status, _) = send(
        app(db, None),
        Method::DELETE,
        &format!("/api/v1/squad/delete/{}", squad.id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(Squad::find().count(db).await?, 0);
    assert_eq!(PlayerStatistic::find().count(db).await?, 0);

    Ok(())
}
