//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for user records and the per-user tag
//! usage aggregate over the user's orders.

use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, FromQueryResult, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

use crate::server::{
    data::CrudRepository,
    error::AppError,
    model::user::{CreateUserParams, TagUsage, UpdateUserParams, User},
    search::{self, page::SearchParamResponse, request::SearchParamRequest},
};

/// Row of the tag usage aggregate.
#[derive(Debug, FromQueryResult)]
struct TagUsageRow {
    name: String,
    count: i64,
    max_order_cost: Option<Decimal>,
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Aggregates tag usage over every order of a user.
    ///
    /// Each ordered certificate counts once per tag it carries. The highest cost is taken
    /// over the orders that contain the tag.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the orders
    ///
    /// # Returns
    /// - `Ok(Vec<TagUsage>)` - Usage per tag sorted by count descending then name; empty
    ///   when the user has no tagged orders
    /// - `Err(DbErr)` - Database error during the query
    pub async fn tag_usage(&self, user_id: i32) -> Result<Vec<TagUsage>, DbErr> {
        let rows = entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Name)
            .column_as(
                Expr::col((
                    entity::order_gift_certificate::Entity,
                    entity::order_gift_certificate::Column::GiftCertificateId,
                ))
                .count(),
                "count",
            )
            .column_as(
                Expr::col((entity::order::Entity, entity::order::Column::Cost)).max(),
                "max_order_cost",
            )
            .join(
                JoinType::InnerJoin,
                entity::tag::Relation::GiftCertificateTag.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::gift_certificate_tag::Relation::GiftCertificate.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::gift_certificate::Relation::OrderGiftCertificate.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::order_gift_certificate::Relation::Order.def(),
            )
            .filter(entity::order::Column::UserId.eq(user_id))
            .group_by(entity::tag::Column::Name)
            .into_model::<TagUsageRow>()
            .all(self.db)
            .await?;

        let mut usage: Vec<TagUsage> = rows
            .into_iter()
            .map(|row| TagUsage {
                name: row.name,
                count: u64::try_from(row.count).unwrap_or(0),
                max_order_cost: row.max_order_cost.unwrap_or(Decimal::ZERO).round_dp(2),
            })
            .collect();

        usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

        Ok(usage)
    }
}

impl CrudRepository for UserRepository<'_> {
    type Model = User;
    type Id = i32;
    type Create = CreateUserParams;
    type Update = UpdateUserParams;

    async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Renames a user.
    async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.username = ActiveValue::Set(params.username);
        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user together with their orders and purchases.
    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn search(&self, request: &SearchParamRequest) -> Result<SearchParamResponse<User>, AppError> {
        Ok(search::search(self.db, entity::prelude::User::find(), request)
            .await?
            .map(User::from_entity))
    }
}
