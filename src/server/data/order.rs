//! Order data repository for database operations.
//!
//! Placing an order writes the order row, its certificate links and one purchase per
//! certificate in a single transaction.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, TransactionTrait,
};

use crate::server::{
    data::{unsupported, CrudRepository},
    error::AppError,
    model::{
        gift_certificate::GiftCertificate,
        order::{CreateOrderParams, Order},
    },
    search::{self, page::SearchParamResponse, request::SearchParamRequest},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the orders of one user.
    pub async fn search_by_user(
        &self,
        user_id: i32,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Order>, AppError> {
        self.search_in(
            entity::prelude::Order::find().filter(entity::order::Column::UserId.eq(user_id)),
            request,
        )
        .await
    }

    /// Loads the certificates of several orders.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Certificates per order ID ordered by certificate ID, without
    ///   their tags
    /// - `Err(DbErr)` - Database error during either query
    pub async fn certificates_for(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<GiftCertificate>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::OrderGiftCertificate::find()
            .filter(
                entity::order_gift_certificate::Column::OrderId.is_in(order_ids.iter().copied()),
            )
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let certificates: HashMap<i32, entity::gift_certificate::Model> =
            entity::prelude::GiftCertificate::find()
                .filter(
                    entity::gift_certificate::Column::Id
                        .is_in(links.iter().map(|link| link.gift_certificate_id)),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|certificate| (certificate.id, certificate))
                .collect();

        let mut result: HashMap<i32, Vec<GiftCertificate>> = HashMap::new();
        for link in links {
            if let Some(certificate) = certificates.get(&link.gift_certificate_id) {
                result
                    .entry(link.order_id)
                    .or_default()
                    .push(GiftCertificate::from_entity(certificate.clone()));
            }
        }

        for certificates in result.values_mut() {
            certificates.sort_by_key(|certificate| certificate.id);
        }

        Ok(result)
    }

    /// Gets the certificates of one order, ordered by ID.
    pub async fn certificates_of(&self, order_id: i32) -> Result<Vec<GiftCertificate>, DbErr> {
        Ok(self
            .certificates_for(&[order_id])
            .await?
            .remove(&order_id)
            .unwrap_or_default())
    }

    async fn search_in(
        &self,
        base: Select<entity::order::Entity>,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Order>, AppError> {
        let mut page = search::search(self.db, base, request)
            .await?
            .map(Order::from_entity);

        if !request.fold {
            let ids: Vec<i32> = page.items.iter().map(|order| order.id).collect();
            let mut certificates = self.certificates_for(&ids).await?;

            for order in page.items.iter_mut() {
                order.certificates = Some(certificates.remove(&order.id).unwrap_or_default());
            }
        }

        Ok(page)
    }
}

impl CrudRepository for OrderRepository<'_> {
    type Model = Order;
    type Id = i32;
    type Create = CreateOrderParams;
    type Update = ();

    /// Places an order for existing certificates.
    ///
    /// The cost is the sum of the current certificate prices. Every certificate gets an
    /// `ACTIVE` purchase running from the purchase date for its duration in days.
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order with its certificates
    /// - `Err(AppError::NotFound)` - A certificate ID does not exist; nothing is written
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let certificates = entity::prelude::GiftCertificate::find()
            .filter(
                entity::gift_certificate::Column::Id
                    .is_in(params.gift_certificate_ids.iter().copied()),
            )
            .order_by_asc(entity::gift_certificate::Column::Id)
            .all(&txn)
            .await?;

        if let Some(missing) = params
            .gift_certificate_ids
            .iter()
            .find(|id| !certificates.iter().any(|c| c.id == **id))
        {
            return Err(AppError::NotFound(format!(
                "Gift certificate with id {} not found",
                missing
            )));
        }

        let purchase_date = Utc::now();
        let cost = certificates
            .iter()
            .fold(Decimal::ZERO, |sum, certificate| sum + certificate.price);

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            cost: ActiveValue::Set(cost),
            purchase_date: ActiveValue::Set(purchase_date),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for certificate in &certificates {
            entity::order_gift_certificate::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                gift_certificate_id: ActiveValue::Set(certificate.id),
            }
            .insert(&txn)
            .await?;

            let end_date = Duration::try_days(i64::from(certificate.duration))
                .and_then(|validity| purchase_date.checked_add_signed(validity))
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Duration {} of gift certificate {} is out of range",
                        certificate.duration, certificate.id
                    ))
                })?;

            entity::purchase::ActiveModel {
                user_id: ActiveValue::Set(params.user_id),
                gift_certificate_id: ActiveValue::Set(certificate.id),
                order_id: ActiveValue::Set(order.id),
                start_date: ActiveValue::Set(purchase_date),
                end_date: ActiveValue::Set(end_date),
                status: ActiveValue::Set(entity::purchase::STATUS_ACTIVE.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        let mut order = Order::from_entity(order);
        order.certificates = Some(
            certificates
                .into_iter()
                .map(GiftCertificate::from_entity)
                .collect(),
        );

        Ok(order)
    }

    /// Gets an order with its certificates.
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut order = Order::from_entity(entity);
        order.certificates = Some(self.certificates_of(id).await?);

        Ok(Some(order))
    }

    /// Orders are immutable once placed.
    async fn update(&self, _params: ()) -> Result<Option<Order>, AppError> {
        unsupported("orders", "update")
    }

    /// Deletes an order; its certificate links and purchases cascade.
    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn search(&self, request: &SearchParamRequest) -> Result<SearchParamResponse<Order>, AppError> {
        self.search_in(entity::prelude::Order::find(), request).await
    }
}
