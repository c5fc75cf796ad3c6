use super::*;

/// Tests filtering purchases by status, case-insensitively.
///
/// Expected: Ok with only the expired purchase
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_id, certificate_id, order_id) = order_fixture(db).await?;
    PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .build()
        .await?;
    let expired = PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .status(entity::purchase::STATUS_EXPIRED)
        .build()
        .await?;

    let request = entity::purchase::Entity::parse_request(&params(&[("status", "expired")]))?;
    let page = PurchaseRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, expired.id);
    assert_eq!(page.items[0].status, PurchaseStatus::Expired);

    Ok(())
}

/// Tests searching one user's purchases by end date.
///
/// Expected: Ok with the user's purchases ending after the given day
#[tokio::test]
async fn searches_user_purchases_by_end_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_id, certificate_id, order_id) = order_fixture(db).await?;
    let (other_id, other_certificate_id, other_order_id) = order_fixture(db).await?;

    let later = PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .build()
        .await?;
    PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .end_date(helpers::days_ago(5))
        .build()
        .await?;
    PurchaseFactory::new(db, other_id, other_certificate_id, other_order_id)
        .build()
        .await?;

    let cutoff = helpers::days_ago(1).format("%Y-%m-%d").to_string();
    let request =
        entity::purchase::Entity::parse_request(&params(&[("gte:endDate", cutoff.as_str())]))?;
    let page = PurchaseRepository::new(db)
        .search_by_user(user_id, &request)
        .await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, later.id);

    Ok(())
}

/// Tests that purchases cannot be created, updated or deleted directly.
///
/// Expected: Err(BadRequest) for each operation
#[tokio::test]
async fn rejects_direct_writes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PurchaseRepository::new(db);

    assert!(matches!(repo.create(()).await, Err(AppError::BadRequest(_))));
    assert!(matches!(repo.update(()).await, Err(AppError::BadRequest(_))));
    assert!(matches!(repo.delete(1).await, Err(AppError::BadRequest(_))));

    Ok(())
}
