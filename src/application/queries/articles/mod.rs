// src/application/queries/articles/mod.rs
mod service;
mod subscribed;

pub use service::ArticleQueryService;
