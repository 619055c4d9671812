use super::*;

/// Tests creating a ticket for an event.
///
/// Expected: Ok with seat fields stored as text
#[tokio::test]
async fn creates_ticket_for_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParams {
            event_id: event.id,
            price: 30.0,
            section: "East".to_string(),
            row: "7".to_string(),
            seat: "21".to_string(),
        })
        .await?;

    assert_eq!(ticket.event_id, event.id);
    assert_eq!(ticket.price, 30.0);
    assert_eq!(ticket.row, "7");

    Ok(())
}

/// Tests the foreign key to the event.
///
/// Expected: Err for an unknown event
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .create(CreateTicketParams {
            event_id: 404,
            price: 30.0,
            section: "East".to_string(),
            row: "7".to_string(),
            seat: "21".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expected: price changed, seat kept
#[tokio::test]
async fn updates_ticket_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let ticket = factory::create_ticket(db, event.id).await?;

    let updated = TicketRepository::new(db)
        .update(
            ticket.id,
            UpdateTicketParams {
                price: Some(12.5),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 12.5);
    assert_eq!(updated.seat, ticket.seat);

    Ok(())
}
