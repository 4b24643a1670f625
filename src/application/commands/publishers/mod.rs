// src/application/commands/publishers/mod.rs
mod capability;
mod create;
mod service;
mod staff;

pub use create::CreatePublisherCommand;
pub use service::PublisherCommandService;
pub use staff::AddStaffCommand;
