// src/application/commands/subscriptions/mod.rs
mod capability;
mod journalists;
mod publishers;
mod service;

pub use journalists::FollowJournalistCommand;
pub use publishers::SubscribePublisherCommand;
pub use service::SubscriptionCommandService;
