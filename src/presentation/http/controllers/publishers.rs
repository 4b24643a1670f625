// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::{AddStaffCommand, CreatePublisherCommand},
    dto::PublisherDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreatePublisherRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddStaffRequest {
    pub user_id: i64,
}

pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<Json<PublisherDto>> {
    state
        .services
        .publisher_commands
        .create_publisher(&user, CreatePublisherCommand { name: payload.name })
        .await
        .into_http()
        .map(Json)
}

pub async fn add_editor(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AddStaffRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .publisher_commands
        .add_editor(
            &user,
            AddStaffCommand {
                publisher_id: id,
                user_id: payload.user_id,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "added" })))
}

pub async fn add_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AddStaffRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .publisher_commands
        .add_journalist(
            &user,
            AddStaffCommand {
                publisher_id: id,
                user_id: payload.user_id,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "added" })))
}
