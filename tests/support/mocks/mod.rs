// tests/support/mocks/mod.rs
pub mod notification;
pub mod repos;
pub mod security;
pub mod time;

pub use notification::*;
pub use repos::*;
pub use security::*;
pub use time::*;
