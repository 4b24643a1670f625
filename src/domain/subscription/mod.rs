// src/domain/subscription/mod.rs
pub mod repository;

pub use repository::SubscriptionRepository;
