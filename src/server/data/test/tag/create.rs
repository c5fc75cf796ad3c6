use super::*;

/// Tests creating a tag and reading it back by ID and by name.
///
/// Expected: Ok with the same tag from every lookup
#[tokio::test]
async fn creates_and_finds_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "outdoor".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_id(tag.id).await?, Some(tag.clone()));
    assert_eq!(repo.find_by_name("outdoor").await?, Some(tag));
    assert!(repo.find_by_name("indoor").await?.is_none());

    Ok(())
}

/// Tests that tags cannot be updated.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagRepository::new(db).update(()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a tag that is attached to a certificate.
///
/// Expected: Ok(true) with the certificate kept and its link removed
#[tokio::test]
async fn deletes_attached_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let certificate = factory::create_gift_certificate(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::link_tag(db, certificate.id, tag.id).await?;

    let repo = TagRepository::new(db);

    assert!(repo.delete(tag.id).await?);
    assert!(repo.find_by_id(tag.id).await?.is_none());
    assert!(
        crate::server::data::gift_certificate::GiftCertificateRepository::new(db)
            .tags_of(certificate.id)
            .await?
            .is_empty()
    );

    Ok(())
}
