use super::*;

/// Tests that a created contact is stamped with the submission time.
///
/// Expected: Ok with date set and fields stored
#[tokio::test]
async fn creates_contact_with_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now().naive_utc() - chrono::Duration::seconds(1);
    let contact = ContactRepository::new(db)
        .create(contact_params("a@b.com"))
        .await?;

    assert_eq!(contact.email, "a@b.com");
    assert_eq!(contact.user_id, None);
    assert!(contact.date >= before);

    Ok(())
}

/// Tests that lists come back in ID order.
///
/// Expected: Ok with both contacts, oldest first
#[tokio::test]
async fn lists_contacts_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactRepository::new(db);
    let first = repo.create(contact_params("first@b.com")).await?;
    let second = repo.create(contact_params("second@b.com")).await?;

    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests updating the message and deleting the contact.
///
/// Expected: update changes only the message, delete removes the row
#[tokio::test]
async fn updates_then_deletes_contact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactRepository::new(db);
    let contact = repo.create(contact_params("edit@b.com")).await?;

    let updated = repo
        .update(
            contact.id,
            UpdateContactParams {
                message: Some("changed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.message, "changed");
    assert_eq!(updated.email, "edit@b.com");

    assert!(repo.delete(contact.id).await?);
    assert!(!repo.delete(contact.id).await?);
    assert_eq!(Contact::find().count(db).await?, 0);

    Ok(())
}
