use newsdesk_core::application::{
    ports::{
        notification::{MailSender, SocialPoster},
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::{ApplicationDependencies, ApplicationServices},
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    publisher::PublisherRepository,
    subscription::SubscriptionRepository,
    user::UserRepository,
};
use newsdesk_core::infrastructure::{
    database,
    notification::{HttpSocialPoster, SmtpMailSender, SocialPostConfig},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresPublisherRepository, PostgresSubscriptionRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let publisher_repo: Arc<dyn PublisherRepository> =
        Arc::new(PostgresPublisherRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let subscription_repo: Arc<dyn SubscriptionRepository> =
        Arc::new(PostgresSubscriptionRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let mailer: Arc<dyn MailSender> = Arc::new(SmtpMailSender::new(
        config.smtp_host(),
        config.smtp_port(),
        config.smtp_credentials(),
    )?);
    let social: Arc<dyn SocialPoster> = Arc::new(HttpSocialPoster::new(SocialPostConfig {
        endpoint: config.social_post_url().to_owned(),
        bearer_token: config.social_post_token(),
        timeout: config.social_post_timeout(),
    })?);

    let services = Arc::new(ApplicationServices::new(ApplicationDependencies {
        user_repo,
        publisher_repo,
        article_write_repo,
        article_read_repo,
        subscription_repo,
        password_hasher,
        token_manager,
        clock,
        mailer,
        social,
        mail_sender_address: config.mail_from().to_owned(),
    }));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
