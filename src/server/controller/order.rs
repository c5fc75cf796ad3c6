use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto, gift_certificate::GiftCertificateDto, order::OrderDto,
        search::SearchResponseDto,
    },
    server::{
        controller::SearchParams, error::AppError, service::order::OrderService, state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Search orders across all users.
///
/// Filter keys: `id`, `cost`, `purchaseDate`, `user` and `certificate`.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Page of orders", body = SearchResponseDto<OrderDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_orders(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = OrderService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|order| order.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its certificates", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order together with its purchases.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted order"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/certificates",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Certificates of the order", body = Vec<GiftCertificateDto>),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_certificates(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let certificates = OrderService::new(&state.db).certificates_of(id).await?;

    let certificates: Vec<GiftCertificateDto> =
        certificates.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(certificates)))
}
