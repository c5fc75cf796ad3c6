use super::*;

/// Tests the default tag listing.
///
/// Verifies that tags are folded by default so their certificates are not loaded.
///
/// Expected: Ok with every tag and `certificates` unset
#[tokio::test]
async fn folds_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let certificate = factory::create_gift_certificate(db).await?;
    let tag = factory::create_tag(db).await?;
    factory::link_tag(db, certificate.id, tag.id).await?;
    factory::create_tag(db).await?;

    let page = TagRepository::new(db)
        .search(&entity::tag::Entity::default_request())
        .await?;

    assert!(page.fold);
    assert_eq!(page.total_items, 2);
    assert!(page.items.iter().all(|tag| tag.certificates.is_none()));

    Ok(())
}

/// Tests an unfolded listing filtered by certificate name.
///
/// Expected: Ok with the tag of that certificate and its certificates loaded
#[tokio::test]
async fn filters_by_certificate_and_loads_certificates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spa = factory::gift_certificate::GiftCertificateFactory::new(db)
        .name("Spa")
        .build()
        .await?;
    let wellness = factory::tag::create_tag_named(db, "wellness").await?;
    let sport = factory::tag::create_tag_named(db, "sport").await?;
    factory::link_tag(db, spa.id, wellness.id).await?;
    let gym = factory::create_gift_certificate(db).await?;
    factory::link_tag(db, gym.id, sport.id).await?;
    factory::link_tag(db, gym.id, wellness.id).await?;

    let request = entity::tag::Entity::parse_request(&params(&[
        ("certificate", "Spa"),
        ("fold", "false"),
    ]))?;
    let page = TagRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 1);
    let tag = &page.items[0];
    assert_eq!(tag.name, "wellness");
    let certificate_ids: Vec<i32> = tag
        .certificates
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(certificate_ids, vec![spa.id, gym.id]);

    Ok(())
}

/// Tests listing the certificates of a tag.
///
/// Expected: Ok with the linked certificates ordered by ID
#[tokio::test]
async fn lists_certificates_of_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;
    let first = factory::create_gift_certificate(db).await?;
    let second = factory::create_gift_certificate(db).await?;
    factory::create_gift_certificate(db).await?;
    factory::link_tag(db, second.id, tag.id).await?;
    factory::link_tag(db, first.id, tag.id).await?;

    let certificates = TagRepository::new(db).certificates_of(tag.id).await?;

    let ids: Vec<i32> = certificates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
