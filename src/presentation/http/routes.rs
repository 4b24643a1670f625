// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    articles, auth, publishers, subscriptions, users,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, patch, post, put},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/users/{id}", patch(users::update_user))
        .route("/api/v1/publishers", post(publishers::create_publisher))
        .route(
            "/api/v1/publishers/{id}/editors",
            post(publishers::add_editor),
        )
        .route(
            "/api/v1/publishers/{id}/journalists",
            post(publishers::add_journalist),
        )
        .route(
            "/api/v1/subscriptions/publishers/{id}",
            put(subscriptions::subscribe_publisher).delete(subscriptions::unsubscribe_publisher),
        )
        .route(
            "/api/v1/subscriptions/journalists/{id}",
            put(subscriptions::follow_journalist).delete(subscriptions::unfollow_journalist),
        )
        .route("/api/v1/articles", post(articles::create_article))
        .route(
            "/api/v1/articles/subscribed",
            get(articles::subscribed_articles),
        )
        .route("/api/v1/articles/{id}", put(articles::update_article))
        .route(
            "/api/v1/articles/{id}/approve",
            post(articles::approve_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
