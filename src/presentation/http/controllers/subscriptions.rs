// src/presentation/http/controllers/subscriptions.rs
use crate::application::commands::subscriptions::{
    FollowJournalistCommand, SubscribePublisherCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::{Value, json};

pub async fn subscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .subscription_commands
        .subscribe_publisher(&user, SubscribePublisherCommand { publisher_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "subscribed" })))
}

pub async fn unsubscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .subscription_commands
        .unsubscribe_publisher(&user, SubscribePublisherCommand { publisher_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "unsubscribed" })))
}

pub async fn follow_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .subscription_commands
        .follow_journalist(&user, FollowJournalistCommand { journalist_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "subscribed" })))
}

pub async fn unfollow_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Value>> {
    state
        .services
        .subscription_commands
        .unfollow_journalist(&user, FollowJournalistCommand { journalist_id: id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "unsubscribed" })))
}
