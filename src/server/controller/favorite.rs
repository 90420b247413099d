use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{animal::AnimalDto, api::ErrorDto, favorite::FavoriteDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, favorite::FavoriteChange},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// List the logged in user's favorites, newest first
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorites with listing detail", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let favorites = FavoriteService::new(&state.db)
        .get_favorites_by_user(user.id)
        .await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(FavoriteDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// List the listings the logged in user has favorited
#[utoipa::path(
    get,
    path = "/api/favorites/animals",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorited listings", body = Vec<AnimalDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_animals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let listings = FavoriteService::new(&state.db)
        .get_favorite_animals_for_user(user.id)
        .await?;

    Ok(Json(
        listings.into_iter().map(AnimalDto::from).collect::<Vec<_>>(),
    ))
}

/// Favorite a listing
///
/// Favoriting an already favorited listing succeeds without change.
#[utoipa::path(
    put,
    path = "/api/favorites/{animal_id}",
    tag = FAVORITE_TAG,
    params(("animal_id" = i32, Path, description = "ID of the listing")),
    responses(
        (status = 204, description = "Listing is a favorite"),
        (status = 404, description = "User or listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(animal_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let change = FavoriteService::new(&state.db)
        .add_favorite(user.id, animal_id)
        .await?;

    match change {
        FavoriteChange::Added | FavoriteChange::AlreadyPresent => {
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        FavoriteChange::MissingReference => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Animal not found".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Remove a listing from the logged in user's favorites
#[utoipa::path(
    delete,
    path = "/api/favorites/{animal_id}",
    tag = FAVORITE_TAG,
    params(("animal_id" = i32, Path, description = "ID of the listing")),
    responses(
        (status = 204, description = "Listing is not a favorite"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(animal_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user.id, animal_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
