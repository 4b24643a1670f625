// src/infrastructure/notification/mod.rs
mod smtp_mailer;
mod social;

pub use smtp_mailer::SmtpMailSender;
pub use social::{HttpSocialPoster, SocialPostConfig};
