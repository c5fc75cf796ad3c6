use super::*;

/// Tests attaching tags by name.
///
/// Verifies that an already attached tag is not linked twice and a missing tag is
/// created.
///
/// Expected: Ok with the full tag set after the change
#[tokio::test]
async fn adds_missing_tags_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let certificate = repo.create(create_params("Dinner", &["food"])).await?;

    let tags = repo
        .add_tags(certificate.id, &["food".to_string(), "city".to_string()])
        .await?;

    let names: Vec<String> = tags.into_iter().map(|tag| tag.name).collect();
    assert_eq!(names, vec!["food", "city"]);

    let links = entity::prelude::GiftCertificateTag::find().count(db).await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests detaching tags by name.
///
/// Verifies that unknown names are ignored and that the tag row itself survives.
///
/// Expected: Ok(1) and one remaining tag on the certificate
#[tokio::test]
async fn removes_only_attached_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let certificate = repo.create(create_params("Museum", &["art", "city"])).await?;

    let removed = repo
        .remove_tags(certificate.id, &["art".to_string(), "unknown".to_string()])
        .await?;

    assert_eq!(removed, 1);
    let remaining: Vec<String> = repo
        .tags_of(certificate.id)
        .await?
        .into_iter()
        .map(|tag| tag.name)
        .collect();
    assert_eq!(remaining, vec!["city"]);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}
