use axum::{extract::State, http::header, response::IntoResponse};

use crate::{
    model::api::ErrorDto,
    server::{
        error::Error,
        model::app::AppState,
        service::directory::DirectoryService,
        util::export::{render_animals_xml, XML_CONTENT_TYPE},
    },
};

pub static EXPORT_TAG: &str = "export";

/// Export every listing as XML, newest first
#[utoipa::path(
    get,
    path = "/export/animals.xml",
    tag = EXPORT_TAG,
    responses(
        (status = 200, description = "All listings", body = String, content_type = "application/xml"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_animals_xml(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let listings = DirectoryService::new(&state.db).list_all_newest().await?;

    Ok((
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        render_animals_xml(&listings),
    ))
}
