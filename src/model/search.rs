use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a search together with the echoed paging parameters.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
    pub sort: String,
    pub order: String,
    pub fold: bool,
}
