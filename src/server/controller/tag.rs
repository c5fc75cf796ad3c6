use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gift_certificate::GiftCertificateDto,
        search::SearchResponseDto,
        tag::{CreateTagDto, TagDto},
    },
    server::{
        controller::SearchParams, error::AppError, model::tag::CreateTagParams,
        service::tag::TagService, state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Search tags.
///
/// Filter keys: `id`, `name` and `certificate`. Results are folded by default; pass
/// `fold=false` to include each tag's certificates.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Page of tags", body = SearchResponseDto<TagDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_tags(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = TagService::new(&state.db).search(&params).await?;

    Ok((StatusCode::OK, Json(page.into_dto(|tag| tag.into_dto()))))
}

/// Create a tag.
///
/// # Returns
/// - `201 Created` - Created tag
/// - `400 Bad Request` - Blank name
/// - `409 Conflict` - A tag with this name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Invalid tag name", body = ErrorDto),
        (status = 409, description = "Tag name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTagParams::from_dto(payload)?;

    let tag = TagService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag and detach it from every certificate.
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tag"),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TagService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the certificates carrying a tag.
#[utoipa::path(
    get,
    path = "/api/tags/{id}/certificates",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Certificates carrying the tag", body = Vec<GiftCertificateDto>),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_certificates(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let certificates = TagService::new(&state.db).certificates_of(id).await?;

    let certificates: Vec<GiftCertificateDto> =
        certificates.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(certificates)))
}
