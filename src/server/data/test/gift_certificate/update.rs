use super::*;
use chrono::{Duration, Utc};

/// Tests a partial update.
///
/// Verifies that only the supplied fields change, that tags are untouched when no tag
/// list is given, and that `last_update_date` moves forward.
///
/// Expected: Ok(Some) with the new duration and the original name and tags
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = GiftCertificateFactory::new(db)
        .name("Climbing")
        .create_date(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let tag = factory::create_tag(db).await?;
    factory::link_tag(db, created.id, tag.id).await?;

    let repo = GiftCertificateRepository::new(db);
    let updated = repo
        .update(UpdateGiftCertificateParams {
            id: created.id,
            name: None,
            description: None,
            price: None,
            duration: Some(90),
            tags: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Climbing");
    assert_eq!(updated.duration, 90);
    assert_eq!(tag_names(&updated), vec![tag.name]);
    assert_eq!(updated.create_date, created.create_date);
    assert!(updated.last_update_date > created.last_update_date);

    Ok(())
}

/// Tests that a supplied tag list replaces the whole tag set.
///
/// Expected: Ok(Some) carrying only the new tags
#[tokio::test]
async fn replaces_tags_when_present() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let created = repo.create(create_params("Kayak", &["water", "sport"])).await?;

    let updated = repo
        .update(UpdateGiftCertificateParams {
            id: created.id,
            name: Some("Kayak tour".to_string()),
            description: None,
            price: Some(Decimal::new(4000, 2)),
            duration: None,
            tags: Some(vec!["sport".to_string(), "outdoor".to_string()]),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Kayak tour");
    assert_eq!(updated.price, Decimal::new(4000, 2));
    assert_eq!(tag_names(&updated), vec!["sport", "outdoor"]);

    Ok(())
}

/// Tests updating a certificate that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_certificate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let result = repo
        .update(UpdateGiftCertificateParams {
            id: 404,
            name: Some("Ghost".to_string()),
            description: None,
            price: None,
            duration: None,
            tags: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
