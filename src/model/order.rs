use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::gift_certificate::GiftCertificateDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub cost: Decimal,
    pub purchase_date: DateTime<Utc>,
    /// Omitted when the response is folded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub certificates: Option<Vec<GiftCertificateDto>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub gift_certificate_ids: Vec<i32>,
}
