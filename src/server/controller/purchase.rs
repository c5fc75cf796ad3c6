use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, purchase::PurchaseDto, search::SearchResponseDto},
    server::{
        controller::SearchParams, error::AppError, service::purchase::PurchaseService,
        state::AppState,
    },
};

/// Tag for grouping purchase endpoints in OpenAPI documentation
pub static PURCHASE_TAG: &str = "purchase";

/// Search purchases across all users.
///
/// Filter keys: `id`, `startDate` (`start`), `endDate` (`end`), `status`, `certificate`
/// and `user`.
#[utoipa::path(
    get,
    path = "/api/purchases",
    tag = PURCHASE_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Page of purchases", body = SearchResponseDto<PurchaseDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_purchases(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = PurchaseService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|purchase| purchase.into_dto()))))
}
