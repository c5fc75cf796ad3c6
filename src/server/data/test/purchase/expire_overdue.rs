use super::*;

/// Tests expiring overdue purchases.
///
/// Creates an overdue active purchase, a current active purchase and an overdue
/// purchase that is already expired.
///
/// Expected: Ok(1) with only the overdue active purchase changed
#[tokio::test]
async fn expires_only_overdue_active_purchases() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_id, certificate_id, order_id) = order_fixture(db).await?;

    let overdue = PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .start_date(helpers::days_ago(40))
        .end_date(helpers::days_ago(10))
        .build()
        .await?;
    let current = PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .build()
        .await?;
    let already = PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .end_date(helpers::days_ago(2))
        .status(entity::purchase::STATUS_EXPIRED)
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);
    let changed = repo.expire_overdue(Utc::now()).await?;

    assert_eq!(changed, 1);
    let overdue = repo.find_by_id(overdue.id).await?.unwrap();
    let current = repo.find_by_id(current.id).await?.unwrap();
    let already = repo.find_by_id(already.id).await?.unwrap();
    assert_eq!(overdue.status, PurchaseStatus::Expired);
    assert_eq!(current.status, PurchaseStatus::Active);
    assert_eq!(already.status, PurchaseStatus::Expired);

    Ok(())
}

/// Tests that a second expiry run changes nothing.
///
/// Expected: Ok(0) on the second run
#[tokio::test]
async fn second_run_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_id, certificate_id, order_id) = order_fixture(db).await?;
    PurchaseFactory::new(db, user_id, certificate_id, order_id)
        .end_date(helpers::days_ago(1))
        .build()
        .await?;

    let repo = PurchaseRepository::new(db);

    assert_eq!(repo.expire_overdue(Utc::now()).await?, 1);
    assert_eq!(repo.expire_overdue(Utc::now()).await?, 0);

    Ok(())
}
