use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::gift_certificate::GiftCertificateDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    /// Omitted when the response is folded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[schema(no_recursion)]
    pub certificates: Option<Vec<GiftCertificateDto>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateTagDto {
    pub name: String,
}
