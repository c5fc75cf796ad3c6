//! Purchase data repository for database operations.
//!
//! Purchases are written only when an order is placed, so the CRUD surface here is
//! read-only apart from the bulk expiry update.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Select,
};

use crate::server::{
    data::{unsupported, CrudRepository},
    error::AppError,
    model::purchase::Purchase,
    search::{self, page::SearchParamResponse, request::SearchParamRequest},
};

pub struct PurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the purchases of one user.
    pub async fn search_by_user(
        &self,
        user_id: i32,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Purchase>, AppError> {
        self.search_in(
            entity::prelude::Purchase::find()
                .filter(entity::purchase::Column::UserId.eq(user_id)),
            request,
        )
        .await
    }

    /// Marks every active purchase whose end date lies before `now` as expired.
    ///
    /// # Arguments
    /// - `now` - Reference time; purchases ending exactly at `now` stay active
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of purchases changed
    /// - `Err(DbErr)` - Database error during the update
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Purchase::update_many()
            .col_expr(
                entity::purchase::Column::Status,
                Expr::value(entity::purchase::STATUS_EXPIRED),
            )
            .filter(entity::purchase::Column::Status.eq(entity::purchase::STATUS_ACTIVE))
            .filter(entity::purchase::Column::EndDate.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn search_in(
        &self,
        base: Select<entity::purchase::Entity>,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Purchase>, AppError> {
        search::search(self.db, base, request)
            .await?
            .try_map(Purchase::from_entity)
    }
}

impl CrudRepository for PurchaseRepository<'_> {
    type Model = Purchase;
    type Id = i32;
    type Create = ();
    type Update = ();

    /// Purchases are created by placing an order.
    async fn create(&self, _params: ()) -> Result<Purchase, AppError> {
        unsupported("purchases", "create")
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Purchase>, AppError> {
        entity::prelude::Purchase::find_by_id(id)
            .one(self.db)
            .await?
            .map(Purchase::from_entity)
            .transpose()
    }

    /// Status changes only through `expire_overdue`.
    async fn update(&self, _params: ()) -> Result<Option<Purchase>, AppError> {
        unsupported("purchases", "update")
    }

    /// Purchases are removed with their order.
    async fn delete(&self, _id: i32) -> Result<bool, AppError> {
        unsupported("purchases", "delete")
    }

    async fn search(
        &self,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Purchase>, AppError> {
        self.search_in(entity::prelude::Purchase::find(), request).await
    }
}
