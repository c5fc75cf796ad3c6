use super::*;

/// Tests an exact name filter.
///
/// Expected: Ok with exactly the matching certificate and one page
#[tokio::test]
async fn filters_by_exact_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCertificateFactory::new(db).name("foo").build().await?;
    GiftCertificateFactory::new(db).name("foobar").build().await?;

    let request = entity::gift_certificate::Entity::parse_request(&params(&[("name", "foo")]))?;
    let page = GiftCertificateRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "foo");

    Ok(())
}

/// Tests a substring filter on the description.
///
/// Expected: Ok with the certificates whose description contains the value
#[tokio::test]
async fn filters_by_description_substring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiftCertificateFactory::new(db)
        .description("Sunset cruise on the lake")
        .build()
        .await?;
    GiftCertificateFactory::new(db)
        .description("Lake fishing trip")
        .build()
        .await?;
    GiftCertificateFactory::new(db)
        .description("Cooking class")
        .build()
        .await?;

    let request = entity::gift_certificate::Entity::parse_request(&params(&[(
        "like:description",
        "lake",
    )]))?;
    let page = GiftCertificateRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 2);

    Ok(())
}

/// Tests a page past the last one.
///
/// Expected: Ok with no items while the totals still describe the full result
#[tokio::test]
async fn returns_empty_page_beyond_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_gift_certificate(db).await?;
    }

    let request = entity::gift_certificate::Entity::parse_request(&params(&[
        ("page", "5"),
        ("size", "2"),
    ]))?;
    let page = GiftCertificateRepository::new(db).search(&request).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 5);
    assert_eq!(page.size, 2);

    Ok(())
}

/// Tests that an empty query echoes the default policy.
///
/// Expected: Ok with sort `id`, ascending order, page 0, size 10 and tags loaded
#[tokio::test]
async fn echoes_default_policy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_gift_certificate(db).await?;
    let second = factory::create_gift_certificate(db).await?;

    let request = entity::gift_certificate::Entity::default_request();
    let page = GiftCertificateRepository::new(db).search(&request).await?;

    assert_eq!(page.sort, "id");
    assert_eq!(page.direction, SortDirection::Asc);
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 10);
    assert!(!page.fold);
    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(page.items.iter().all(|c| c.tags.is_some()));

    Ok(())
}

/// Tests filtering by several tags.
///
/// Verifies that repeated tag values match certificates carrying any of them and that
/// a certificate carrying both appears once.
///
/// Expected: Ok with the two tagged certificates, each listed once
#[tokio::test]
async fn filters_by_any_of_several_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    let both = repo.create(create_params("Both", &["red", "blue"])).await?;
    let red = repo.create(create_params("Red", &["red"])).await?;
    repo.create(create_params("Green", &["green"])).await?;

    let request = entity::gift_certificate::Entity::parse_request(&params(&[
        ("tag", "red"),
        ("tag", "blue"),
    ]))?;
    let page = repo.search(&request).await?;

    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(page.total_items, 2);
    assert_eq!(ids, vec![both.id, red.id]);
    assert_eq!(tag_names(&page.items[0]), vec!["red", "blue"]);

    Ok(())
}

/// Tests a price range combined with a descending sort.
///
/// Verifies that certificates with equal prices keep ascending ID order.
///
/// Expected: Ok with the in-range certificates, most expensive first
#[tokio::test]
async fn sorts_price_range_descending_with_stable_ties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap = GiftCertificateFactory::new(db)
        .price(Decimal::new(500, 2))
        .build()
        .await?;
    let mid_a = GiftCertificateFactory::new(db)
        .price(Decimal::new(2000, 2))
        .build()
        .await?;
    let mid_b = GiftCertificateFactory::new(db)
        .price(Decimal::new(2000, 2))
        .build()
        .await?;
    let high = GiftCertificateFactory::new(db)
        .price(Decimal::new(7500, 2))
        .build()
        .await?;
    GiftCertificateFactory::new(db)
        .price(Decimal::new(15000, 2))
        .build()
        .await?;

    let request = entity::gift_certificate::Entity::parse_request(&params(&[
        ("gte:price", "5"),
        ("lt:price", "100"),
        ("sort", "price"),
        ("order", "desc"),
    ]))?;
    let page = GiftCertificateRepository::new(db).search(&request).await?;

    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![high.id, mid_a.id, mid_b.id, cheap.id]);

    Ok(())
}

/// Tests that folded results leave tags unloaded.
///
/// Expected: Ok with `tags` set to `None` on every item
#[tokio::test]
async fn folded_search_omits_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiftCertificateRepository::new(db);
    repo.create(create_params("Tagged", &["gift"])).await?;

    let request = entity::gift_certificate::Entity::parse_request(&params(&[("fold", "on")]))?;
    let page = repo.search(&request).await?;

    assert!(page.fold);
    assert_eq!(page.items.len(), 1);
    assert!(page.items[0].tags.is_none());

    Ok(())
}

/// Tests that running the same search twice yields the same page.
///
/// Expected: Ok with identical responses
#[tokio::test]
async fn repeated_search_is_stable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        GiftCertificateFactory::new(db)
            .duration(7)
            .build()
            .await?;
    }

    let request = entity::gift_certificate::Entity::parse_request(&params(&[
        ("sort", "duration"),
        ("size", "2"),
        ("page", "1"),
    ]))?;
    let repo = GiftCertificateRepository::new(db);

    let first = repo.search(&request).await?;
    let second = repo.search(&request).await?;

    assert_eq!(first, second);
    assert_eq!(first.items.len(), 2);

    Ok(())
}
