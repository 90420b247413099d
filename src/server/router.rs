//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered with its utoipa specification; Swagger UI is served at
//! `/api/docs` with the document at `/api/docs/openapi.json`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered together. Request bodies are capped at
/// [`controller::animal::MAX_UPLOAD_BYTES`] so listing images fit.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "PetPal", description = "PetPal adoption listings API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session routes"),
        (name = controller::animal::ANIMAL_TAG, description = "Listing and category routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite routes"),
        (name = controller::message::MESSAGE_TAG, description = "Messaging routes"),
        (name = controller::export::EXPORT_TAG, description = "Data export routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::change_password))
        .routes(routes!(controller::auth::reset_password))
        .routes(routes!(controller::animal::list_categories))
        .routes(routes!(
            controller::animal::search_animals,
            controller::animal::create_animal
        ))
        .routes(routes!(controller::animal::get_my_animals))
        .routes(routes!(
            controller::animal::get_animal,
            controller::animal::delete_animal
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(controller::favorite::get_favorite_animals))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .routes(routes!(controller::message::get_inbox))
        .routes(routes!(controller::message::get_sent))
        .routes(routes!(controller::message::send_message))
        .routes(routes!(controller::message::prepare_reply))
        .routes(routes!(controller::message::delete_inbox_message))
        .routes(routes!(controller::message::delete_sent_message))
        .routes(routes!(controller::export::export_animals_xml))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(controller::animal::MAX_UPLOAD_BYTES))
}
