// src/application/commands/articles/mod.rs
mod approve;
mod capability;
mod create;
mod service;
mod update;

pub use approve::ApproveArticleCommand;
pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
