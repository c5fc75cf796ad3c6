use super::*;

/// Tests a username substring filter sorted descending.
///
/// Expected: Ok with the matching users in reverse username order
#[tokio::test]
async fn filters_by_username_substring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["anna", "joanna", "bob"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let request = entity::user::Entity::parse_request(&params(&[
        ("p:username", "anna"),
        ("sort", "username"),
        ("order", "DESC"),
    ]))?;
    let page = UserRepository::new(db).search(&request).await?;

    let names: Vec<String> = page.items.into_iter().map(|u| u.username).collect();
    assert_eq!(names, vec!["joanna", "anna"]);

    Ok(())
}

/// Tests that a substring filter treats `%` literally.
///
/// Expected: Ok with only the username containing a percent sign
#[tokio::test]
async fn escapes_wildcards_in_substring_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("100%club")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("100club")
        .build()
        .await?;

    let request = entity::user::Entity::parse_request(&params(&[("like:username", "0%c")]))?;
    let page = UserRepository::new(db).search(&request).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].username, "100%club");

    Ok(())
}
