// src/application/notifications/mod.rs
mod service;

pub use service::NotificationService;
