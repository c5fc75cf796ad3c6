use super::*;

/// Tests creating and renaming a user.
///
/// Expected: Ok with the new username visible through every lookup
#[tokio::test]
async fn creates_and_renames_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
        })
        .await?;

    let renamed = repo
        .update(UpdateUserParams {
            id: user.id,
            username: "alice.b".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(renamed.id, user.id);
    assert_eq!(renamed.username, "alice.b");
    assert!(repo.find_by_username("alice").await?.is_none());
    assert_eq!(repo.find_by_username("alice.b").await?, Some(renamed));

    Ok(())
}

/// Tests renaming a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_renaming_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 99,
            username: "nobody".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that deleting a user removes their orders and purchases.
///
/// Expected: Ok(true) with no orders or purchases left
#[tokio::test]
async fn deletes_user_with_orders() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let certificate = factory::create_gift_certificate(db).await?;
    helpers::create_order_with_purchases(db, &user, &[certificate]).await?;

    assert!(UserRepository::new(db).delete(user.id).await?);

    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Purchase::find().count(db).await?, 0);

    Ok(())
}
