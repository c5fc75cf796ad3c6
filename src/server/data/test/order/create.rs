use super::*;
use chrono::Duration;

/// Tests placing an order for two certificates.
///
/// Verifies the summed cost, the certificate links and one active purchase per
/// certificate whose window matches the certificate duration.
///
/// Expected: Ok with the order, its certificates and two purchases
#[tokio::test]
async fn places_order_with_purchases() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let week = GiftCertificateFactory::new(db)
        .price(Decimal::new(1250, 2))
        .duration(7)
        .build()
        .await?;
    let month = GiftCertificateFactory::new(db)
        .price(Decimal::new(3000, 2))
        .duration(30)
        .build()
        .await?;

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            gift_certificate_ids: vec![month.id, week.id],
        })
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.cost, Decimal::new(4250, 2));
    let certificate_ids: Vec<i32> = order
        .certificates
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(certificate_ids, vec![week.id, month.id]);

    let purchases = entity::prelude::Purchase::find().all(db).await?;
    assert_eq!(purchases.len(), 2);
    for purchase in purchases {
        let duration = if purchase.gift_certificate_id == week.id { 7 } else { 30 };
        assert_eq!(purchase.order_id, order.id);
        assert_eq!(purchase.start_date, order.purchase_date);
        assert_eq!(purchase.end_date, order.purchase_date + Duration::days(duration));
        assert_eq!(purchase.status, entity::purchase::STATUS_ACTIVE);
    }

    Ok(())
}

/// Tests placing an order that references a missing certificate.
///
/// Expected: Err(NotFound) with no order, link or purchase written
#[tokio::test]
async fn fails_for_missing_certificate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let certificate = factory::create_gift_certificate(db).await?;

    let result = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            gift_certificate_ids: vec![certificate.id, certificate.id + 100],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);
    assert_eq!(entity::prelude::OrderGiftCertificate::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Purchase::find().count(db).await?, 0);

    Ok(())
}

/// Tests that orders cannot be updated and that deleting one removes its purchases.
///
/// Expected: Err(BadRequest) for update, Ok(true) for delete
#[tokio::test]
async fn rejects_update_and_deletes_with_purchases() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let certificate = factory::create_gift_certificate(db).await?;
    let (order, _) = helpers::create_order_with_purchases(db, &user, &[certificate]).await?;

    let repo = OrderRepository::new(db);

    assert!(matches!(repo.update(()).await, Err(AppError::BadRequest(_))));
    assert!(repo.delete(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.is_none());
    assert_eq!(entity::prelude::Purchase::find().count(db).await?, 0);

    Ok(())
}

/// Tests placing an order for a stored certificate whose validity runs past the
/// representable date range.
///
/// Expected: Err(BadRequest) with no order or purchase written
#[tokio::test]
async fn rejects_out_of_range_duration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let certificate = GiftCertificateFactory::new(db)
        .duration(i32::MAX)
        .build()
        .await?;

    let result = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            gift_certificate_ids: vec![certificate.id],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());
    assert!(entity::prelude::Purchase::find().all(db).await?.is_empty());

    Ok(())
}
