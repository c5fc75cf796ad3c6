use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto},
        purchase::PurchaseDto,
        search::SearchResponseDto,
        user::{CreateUserDto, TagUsageDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::SearchParams,
        error::AppError,
        model::{
            order::CreateOrderParams,
            user::{CreateUserParams, TagUsage, UpdateUserParams},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularTagsParams {
    /// Only return the tags sharing the highest count.
    #[serde(default)]
    pub top: bool,
}

/// Search users.
///
/// Filter keys: `id` and `username`.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Page of users", body = SearchResponseDto<UserDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = UserService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|user| user.into_dto()))))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Blank username", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Rename a user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully renamed user", body = UserDto),
        (status = 400, description = "Blank username", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateUserParams::from_dto(id, payload)?;

    let user = UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with their orders and purchases.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search the orders of a user.
///
/// Filter keys: `id`, `cost`, `purchaseDate`, `user` and `certificate`.
#[utoipa::path(
    get,
    path = "/api/users/{id}/orders",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        SearchParams
    ),
    responses(
        (status = 200, description = "Page of the user's orders", body = SearchResponseDto<OrderDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_user_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = UserService::new(&state.db).orders_of(id, &params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|order| order.into_dto()))))
}

/// Place an order for the user.
///
/// Creates the order with the summed price of the certificates and one active
/// purchase per certificate, all in one transaction.
///
/// # Returns
/// - `201 Created` - Placed order with its certificates
/// - `400 Bad Request` - Empty certificate list
/// - `404 Not Found` - User or certificate not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{id}/orders",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Empty certificate list", body = ErrorDto),
        (status = 404, description = "User or certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOrderParams::from_dto(id, payload)?;

    let order = UserService::new(&state.db).make_order(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Search the purchases of a user.
///
/// Filter keys: `id`, `startDate`, `endDate`, `status`, `certificate` and `user`.
#[utoipa::path(
    get,
    path = "/api/users/{id}/purchases",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        SearchParams
    ),
    responses(
        (status = 200, description = "Page of the user's purchases", body = SearchResponseDto<PurchaseDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_user_purchases(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = UserService::new(&state.db)
        .purchases_of(id, &params)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|purchase| purchase.into_dto()))))
}

/// Tag usage across the user's orders.
///
/// Sorted by count descending then name. With `top=true` only the tags sharing the
/// highest count are returned.
#[utoipa::path(
    get,
    path = "/api/users/{id}/tags/popular",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        PopularTagsParams
    ),
    responses(
        (status = 200, description = "Tag usage", body = Vec<TagUsageDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<PopularTagsParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let usage = if params.top {
        service.most_popular_tags(id).await?
    } else {
        service.popular_tags(id).await?
    };

    let usage: Vec<TagUsageDto> = usage.into_iter().map(TagUsage::into_dto).collect();

    Ok((StatusCode::OK, Json(usage)))
}
