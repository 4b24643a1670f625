// src/application/commands/mod.rs
pub mod articles;
pub mod publishers;
pub mod subscriptions;
pub mod users;
