use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::tag::TagDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiftCertificateDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Validity in days from the purchase date.
    pub duration: i32,
    pub create_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    /// Omitted when the response is folded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[schema(no_recursion)]
    pub tags: Option<Vec<TagDto>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCertificateDto {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration: i32,
    /// Tag names; missing tags are created.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGiftCertificateDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
    /// Replaces the full tag set when present.
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TagNamesDto {
    pub tags: Vec<String>,
}
