use super::*;

/// Tests searching the orders of one user.
///
/// Expected: Ok with only that user's orders, certificates loaded
#[tokio::test]
async fn searches_orders_of_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let certificate = factory::create_gift_certificate(db).await?;

    let (order, _) =
        helpers::create_order_with_purchases(db, &user, &[certificate.clone()]).await?;
    helpers::create_order_with_purchases(db, &other, &[certificate.clone()]).await?;

    let page = OrderRepository::new(db)
        .search_by_user(user.id, &entity::order::Entity::default_request())
        .await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, order.id);
    let certificates = page.items[0].certificates.as_ref().unwrap();
    assert_eq!(certificates.len(), 1);
    assert_eq!(certificates[0].id, certificate.id);

    Ok(())
}

/// Tests filtering orders by cost range and by the owner's username.
///
/// Expected: Ok with the single order matching both conditions
#[tokio::test]
async fn filters_by_cost_and_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let cheap = GiftCertificateFactory::new(db)
        .price(Decimal::new(500, 2))
        .build()
        .await?;
    let pricey = GiftCertificateFactory::new(db)
        .price(Decimal::new(8000, 2))
        .build()
        .await?;

    helpers::create_order_with_purchases(db, &alice, &[cheap.clone()]).await?;
    let (expected, _) =
        helpers::create_order_with_purchases(db, &alice, &[pricey.clone()]).await?;
    helpers::create_order_with_purchases(db, &bob, &[pricey.clone()]).await?;

    let request = entity::order::Entity::parse_request(&params(&[
        ("gt:cost", "50"),
        ("user", "alice"),
        ("fold", "true"),
    ]))?;
    let page = OrderRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, expected.id);
    assert!(page.items[0].certificates.is_none());

    Ok(())
}
