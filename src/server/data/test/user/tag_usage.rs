use super::*;

/// Tests the tag usage aggregate over a user's orders.
///
/// Creates two orders: one with a `spa`+`relax` certificate and a `relax` certificate,
/// another with the `spa`+`relax` certificate alone. Another user's order must not
/// count.
///
/// Expected: Ok with `relax` counted three times and `spa` twice, each with the highest
/// cost of the orders containing it
#[tokio::test]
async fn aggregates_tags_over_user_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let spa = factory::tag::create_tag_named(db, "spa").await?;
    let relax = factory::tag::create_tag_named(db, "relax").await?;

    let massage = GiftCertificateFactory::new(db)
        .price(Decimal::new(4000, 2))
        .build()
        .await?;
    factory::link_tag(db, massage.id, spa.id).await?;
    factory::link_tag(db, massage.id, relax.id).await?;

    let sauna = GiftCertificateFactory::new(db)
        .price(Decimal::new(1000, 2))
        .build()
        .await?;
    factory::link_tag(db, sauna.id, relax.id).await?;

    helpers::create_order_with_purchases(db, &user, &[massage.clone(), sauna.clone()]).await?;
    helpers::create_order_with_purchases(db, &user, &[massage.clone()]).await?;
    helpers::create_order_with_purchases(db, &other, &[massage.clone(), sauna.clone()]).await?;

    let usage = UserRepository::new(db).tag_usage(user.id).await?;

    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].name, "relax");
    assert_eq!(usage[0].count, 3);
    assert_eq!(usage[0].max_order_cost, Decimal::new(5000, 2));
    assert_eq!(usage[1].name, "spa");
    assert_eq!(usage[1].count, 2);
    assert_eq!(usage[1].max_order_cost, Decimal::new(5000, 2));

    Ok(())
}

/// Tests the aggregate for a user without orders.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_usage_without_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(UserRepository::new(db).tag_usage(user.id).await?.is_empty());

    Ok(())
}
