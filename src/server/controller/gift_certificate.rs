use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gift_certificate::{
            CreateGiftCertificateDto, GiftCertificateDto, TagNamesDto, UpdateGiftCertificateDto,
        },
        search::SearchResponseDto,
        tag::TagDto,
    },
    server::{
        controller::SearchParams,
        error::AppError,
        model::{
            gift_certificate::{CreateGiftCertificateParams, UpdateGiftCertificateParams},
            tag::Tag,
        },
        service::gift_certificate::GiftCertificateService,
        state::AppState,
    },
};

/// Tag for grouping gift certificate endpoints in OpenAPI documentation
pub static GIFT_CERTIFICATE_TAG: &str = "gift-certificate";

/// Search gift certificates.
///
/// Filters, sorts and pages the certificate catalog. Filter keys: `id`, `name`,
/// `description`, `price`, `duration`, `createDate` (`create`), `lastUpdateDate`
/// (`update`) and `tag`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Raw query parameters in request order
///
/// # Returns
/// - `200 OK` - Requested page of certificates
/// - `400 Bad Request` - Unknown key, operator or malformed value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = GIFT_CERTIFICATE_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Page of gift certificates", body = SearchResponseDto<GiftCertificateDto>),
        (status = 400, description = "Malformed search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_certificates(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let page = GiftCertificateService::new(&state.db)
        .search(&params)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(|c| c.into_dto()))))
}

/// Create a gift certificate.
///
/// Tags are given by name; missing tags are created.
///
/// # Returns
/// - `201 Created` - Created certificate with its tags
/// - `400 Bad Request` - Blank name, negative price or non-positive duration
/// - `409 Conflict` - A certificate with this name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/certificates",
    tag = GIFT_CERTIFICATE_TAG,
    request_body = CreateGiftCertificateDto,
    responses(
        (status = 201, description = "Successfully created gift certificate", body = GiftCertificateDto),
        (status = 400, description = "Invalid certificate data", body = ErrorDto),
        (status = 409, description = "Certificate name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_certificate(
    State(state): State<AppState>,
    Json(payload): Json<CreateGiftCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateGiftCertificateParams::from_dto(payload)?;

    let certificate = GiftCertificateService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(certificate.into_dto())))
}

/// Get a gift certificate with its tags.
#[utoipa::path(
    get,
    path = "/api/certificates/{id}",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    responses(
        (status = 200, description = "Gift certificate", body = GiftCertificateDto),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let certificate = GiftCertificateService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(certificate.into_dto())))
}

/// Partially update a gift certificate.
///
/// Absent fields are left unchanged; a present `tags` list replaces the tag set.
///
/// # Returns
/// - `200 OK` - Updated certificate
/// - `400 Bad Request` - Invalid field value
/// - `404 Not Found` - Gift certificate not found
/// - `409 Conflict` - The new name belongs to another certificate
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/certificates/{id}",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    request_body = UpdateGiftCertificateDto,
    responses(
        (status = 200, description = "Successfully updated gift certificate", body = GiftCertificateDto),
        (status = 400, description = "Invalid certificate data", body = ErrorDto),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 409, description = "Certificate name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_certificate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGiftCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateGiftCertificateParams::from_dto(id, payload)?;

    let certificate = GiftCertificateService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(certificate.into_dto())))
}

/// Delete a gift certificate.
///
/// Also removes its tag links, order links and purchases.
#[utoipa::path(
    delete,
    path = "/api/certificates/{id}",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted gift certificate"),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_certificate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GiftCertificateService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the tags of a gift certificate.
#[utoipa::path(
    get,
    path = "/api/certificates/{id}/tags",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    responses(
        (status = 200, description = "Tags of the certificate", body = Vec<TagDto>),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certificate_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tags = GiftCertificateService::new(&state.db).tags_of(id).await?;

    Ok((StatusCode::OK, Json(tags_to_dto(tags))))
}

/// Attach tags to a gift certificate by name.
///
/// Missing tags are created; tags already attached are ignored.
///
/// # Returns
/// - `200 OK` - Full tag set after the change
/// - `400 Bad Request` - Blank tag name
/// - `404 Not Found` - Gift certificate not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/certificates/{id}/tags",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    request_body = TagNamesDto,
    responses(
        (status = 200, description = "Tags of the certificate after the change", body = Vec<TagDto>),
        (status = 400, description = "Invalid tag name", body = ErrorDto),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_certificate_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TagNamesDto>,
) -> Result<impl IntoResponse, AppError> {
    let tags = GiftCertificateService::new(&state.db)
        .add_tags(id, &payload.tags)
        .await?;

    Ok((StatusCode::OK, Json(tags_to_dto(tags))))
}

/// Detach tags from a gift certificate by name.
#[utoipa::path(
    delete,
    path = "/api/certificates/{id}/tags",
    tag = GIFT_CERTIFICATE_TAG,
    params(
        ("id" = i32, Path, description = "Gift certificate ID")
    ),
    request_body = TagNamesDto,
    responses(
        (status = 200, description = "Remaining tags of the certificate", body = Vec<TagDto>),
        (status = 400, description = "Invalid tag name", body = ErrorDto),
        (status = 404, description = "Gift certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_certificate_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TagNamesDto>,
) -> Result<impl IntoResponse, AppError> {
    let tags = GiftCertificateService::new(&state.db)
        .remove_tags(id, &payload.tags)
        .await?;

    Ok((StatusCode::OK, Json(tags_to_dto(tags))))
}

fn tags_to_dto(tags: Vec<Tag>) -> Vec<TagDto> {
    tags.into_iter().map(Tag::into_dto).collect()
}
