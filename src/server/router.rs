//! Route table and API documentation.
//!
//! Routes are registered through `utoipa_axum` so every handler's `#[utoipa::path]`
//! lands in the generated OpenAPI document, which is served with Swagger UI at
//! `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{gift_certificate, order, purchase, tag, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "certstore",
        description = "Gift certificate store with searchable catalog, orders and purchases"
    ),
    tags(
        (name = "gift-certificate", description = "Gift certificate catalog"),
        (name = "tag", description = "Certificate tags"),
        (name = "user", description = "Users, their orders, purchases and tag usage"),
        (name = "order", description = "Orders across all users"),
        (name = "purchase", description = "Purchased certificate validity windows")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            gift_certificate::search_certificates,
            gift_certificate::create_certificate
        ))
        .routes(routes!(
            gift_certificate::get_certificate,
            gift_certificate::update_certificate,
            gift_certificate::delete_certificate
        ))
        .routes(routes!(
            gift_certificate::get_certificate_tags,
            gift_certificate::add_certificate_tags,
            gift_certificate::remove_certificate_tags
        ))
        .routes(routes!(tag::search_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::delete_tag))
        .routes(routes!(tag::get_tag_certificates))
        .routes(routes!(user::search_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::search_user_orders, user::create_user_order))
        .routes(routes!(user::search_user_purchases))
        .routes(routes!(user::get_popular_tags))
        .routes(routes!(order::search_orders))
        .routes(routes!(order::get_order, order::delete_order))
        .routes(routes!(order::get_order_certificates))
        .routes(routes!(purchase::search_purchases))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
