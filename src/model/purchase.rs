use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub id: i32,
    pub user_id: i32,
    pub gift_certificate_id: i32,
    pub order_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// `ACTIVE` or `EXPIRED`.
    pub status: String,
}
