use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        animal::{AnimalDto, AnimalSearchParams, CategoryDto, CreateAnimalForm},
        api::{ErrorDto, FieldErrorDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{validation::ValidationError, Error},
        model::{
            animal::{AnimalSearch, NewAnimal},
            app::AppState,
        },
        service::directory::DirectoryService,
    },
};

pub static ANIMAL_TAG: &str = "animal";

/// Largest request body accepted by the router, sized for listing images
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Multipart fields collected before validation
#[derive(Default)]
struct AnimalForm {
    name: String,
    age: Option<String>,
    category_id: Option<String>,
    gender: Option<String>,
    short_description: Option<String>,
    full_description: Option<String>,
    image: Option<Bytes>,
}

impl AnimalForm {
    async fn read(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => form.image = Some(field.bytes().await?),
                "name" => form.name = field.text().await?,
                "age" => form.age = non_blank(field.text().await?),
                "category_id" => form.category_id = non_blank(field.text().await?),
                "gender" => form.gender = non_blank(field.text().await?),
                "short_description" => form.short_description = non_blank(field.text().await?),
                "full_description" => form.full_description = non_blank(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    value.parse::<i32>().map_err(|_| ValidationError::InvalidField {
        field,
        reason: "must be a whole number".to_string(),
    })
}

/// List all categories alphabetically
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = ANIMAL_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = DirectoryService::new(&state.db).list_categories().await?;

    Ok(Json(
        categories
            .into_iter()
            .map(CategoryDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// Browse listings with optional filters and ordering
#[utoipa::path(
    get,
    path = "/api/animals",
    tag = ANIMAL_TAG,
    params(AnimalSearchParams),
    responses(
        (status = 200, description = "Matching listings", body = Vec<AnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_animals(
    State(state): State<AppState>,
    Query(params): Query<AnimalSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let search = AnimalSearch::from(params);

    let listings = DirectoryService::new(&state.db).search(&search).await?;

    Ok(Json(
        listings.into_iter().map(AnimalDto::from).collect::<Vec<_>>(),
    ))
}

/// Create a listing owned by the logged in user
///
/// # Responses
/// - 201 (Created): Listing created
/// - 400 (Bad Request): Missing or invalid field, or unknown category
/// - 404 (Not Found): Not logged in
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/animals",
    tag = ANIMAL_TAG,
    request_body(content = CreateAnimalForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Listing created", body = AnimalDto),
        (status = 400, description = "Invalid listing", body = FieldErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_animal(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let owner = get_user_from_session(&state, &session).await?;
    let form = AnimalForm::read(multipart).await?;

    let Some(age) = form.age.as_deref() else {
        return Err(ValidationError::MissingField("age").into());
    };
    let age = parse_int("age", age)?;
    let category_id = form
        .category_id
        .as_deref()
        .map(|id| parse_int("category_id", id))
        .transpose()?;

    let animal = NewAnimal {
        name: form.name.trim().to_string(),
        age,
        gender: form.gender,
        short_description: form.short_description,
        full_description: form.full_description,
    };

    let listing = DirectoryService::new(&state.db)
        .save_animal(
            animal,
            Some(&owner),
            category_id,
            form.image.map(std::io::Cursor::new),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AnimalDto::from(listing))))
}

/// List the logged in user's own listings, newest first
#[utoipa::path(
    get,
    path = "/api/animals/mine",
    tag = ANIMAL_TAG,
    responses(
        (status = 200, description = "Listings owned by the user", body = Vec<AnimalDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_animals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let listings = DirectoryService::new(&state.db)
        .list_by_owner(Some(user.id))
        .await?;

    Ok(Json(
        listings.into_iter().map(AnimalDto::from).collect::<Vec<_>>(),
    ))
}

/// Get a single listing
#[utoipa::path(
    get,
    path = "/api/animals/{animal_id}",
    tag = ANIMAL_TAG,
    params(("animal_id" = i32, Path, description = "ID of the listing")),
    responses(
        (status = 200, description = "The listing", body = AnimalDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(listing) = DirectoryService::new(&state.db)
        .find_animal(animal_id)
        .await?
    else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Animal not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok(Json(AnimalDto::from(listing)).into_response())
}

/// Delete one of the logged in user's listings
///
/// Missing listings and listings owned by someone else get the same response.
#[utoipa::path(
    delete,
    path = "/api/animals/{animal_id}",
    tag = ANIMAL_TAG,
    params(("animal_id" = i32, Path, description = "ID of the listing")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 403, description = "Listing cannot be deleted by this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_animal(
    State(state): State<AppState>,
    session: Session,
    Path(animal_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let deleted = DirectoryService::new(&state.db)
        .delete_if_owner(animal_id, user.id)
        .await?;

    if !deleted {
        return Ok((
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "You cannot delete this listing".to_string(),
            }),
        )
            .into_response());
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
