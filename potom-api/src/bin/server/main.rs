use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Duration;
use potom_api::config::Config;
use potom_api::domain::group::service::GroupService;
use potom_api::domain::session::models::SessionPolicy;
use potom_api::domain::session::service::SessionService;
use potom_api::domain::user::service::UserService;
use potom_api::inbound::http::metrics::RequestMetrics;
use potom_api::inbound::http::router::create_router;
use potom_api::inbound::http::router::AppState;
use potom_api::outbound::repositories::PostgresGroupRepository;
use potom_api::outbound::repositories::PostgresRefreshTokenRepository;
use potom_api::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "potom_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "potom-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        platform = ?config.server.platform,
        jwt_issuer = %config.jwt.issuer,
        access_token_ttl_seconds = config.jwt.access_token_ttl_seconds,
        refresh_token_ttl_days = config.jwt.refresh_token_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_cost(
        config.password.memory_cost_kib,
        config.password.time_cost,
        config.password.parallelism,
    )?;
    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_issuer(config.jwt.issuer.clone())
            .with_password_hasher(password_hasher),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let group_repository = Arc::new(PostgresGroupRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool));

    let policy = SessionPolicy {
        access_token_ttl: Duration::seconds(config.jwt.access_token_ttl_seconds),
        refresh_token_ttl: Duration::days(config.jwt.refresh_token_ttl_days),
    };

    let state = AppState {
        user_service: Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        )),
        group_service: Arc::new(GroupService::new(group_repository)),
        session_service: Arc::new(SessionService::new(
            user_repository,
            refresh_token_repository,
            authenticator,
            policy,
        )),
        metrics: Arc::new(RequestMetrics::new()),
        platform: config.server.platform,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;
    tracing::info!("Server exited");

    Ok(())
}
