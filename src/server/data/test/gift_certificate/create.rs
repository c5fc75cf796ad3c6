use super::*;

/// Tests creating a certificate with a mix of existing and new tags.
///
/// Verifies that an existing tag is reused rather than duplicated, that the missing
/// tag is inserted, and that both dates are set.
///
/// Expected: Ok with both tags attached and two tag rows in total
#[tokio::test]
async fn creates_certificate_with_existing_and_new_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::create_tag_named(db, "spa").await?;

    let repo = GiftCertificateRepository::new(db);
    let certificate = repo
        .create(create_params("Spa day", &["spa", "relax"]))
        .await?;

    assert_eq!(certificate.name, "Spa day");
    assert_eq!(certificate.price, Decimal::new(2550, 2));
    assert_eq!(certificate.duration, 14);
    assert_eq!(certificate.create_date, certificate.last_update_date);
    assert_eq!(tag_names(&certificate), vec!["spa", "relax"]);

    let tag_count = entity::prelude::Tag::find().count(db).await?;
    assert_eq!(tag_count, 2);

    Ok(())
}

/// Tests creating a certificate without tags.
///
/// Expected: Ok with an empty, loaded tag list
#[tokio::test]
async fn creates_certificate_without_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let certificate = repo.create(create_params("Plain", &[])).await?;

    assert_eq!(certificate.tags, Some(vec![]));

    let found = repo.find_by_id(certificate.id).await?.unwrap();
    assert_eq!(found, certificate);

    Ok(())
}

/// Tests that a duplicate certificate name is rejected by the unique constraint.
///
/// Expected: Err with a database error and no tag rows from the failed attempt
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCertificateFactory::new(db).name("Taken").build().await?;

    let repo = GiftCertificateRepository::new(db);
    let result = repo.create(create_params("Taken", &["orphan"])).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    let tag_count = entity::prelude::Tag::find().count(db).await?;
    assert_eq!(tag_count, 0);

    Ok(())
}

/// Tests deleting a certificate.
///
/// Verifies that tag links cascade while the tags themselves remain.
///
/// Expected: Ok(true) on first delete, Ok(false) on the second
#[tokio::test]
async fn deletes_certificate_and_its_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let certificate = factory::create_gift_certificate(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::link_tag(db, certificate.id, tag.id).await?;

    let repo = GiftCertificateRepository::new(db);

    assert!(repo.delete(certificate.id).await?);
    assert!(!repo.delete(certificate.id).await?);
    assert!(repo.find_by_id(certificate.id).await?.is_none());

    let links = entity::prelude::GiftCertificateTag::find().count(db).await?;
    assert_eq!(links, 0);
    assert!(entity::prelude::Tag::find_by_id(tag.id).one(db).await?.is_some());

    Ok(())
}
