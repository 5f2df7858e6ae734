use std::sync::Arc;

use auth::Authenticator;
use catalog_service::config::Config;
use catalog_service::domain::product::ports::ProductServicePort;
use catalog_service::domain::product::service::ProductService;
use catalog_service::domain::user::ports::UserServicePort;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::InMemoryProductRepository;
use catalog_service::outbound::repositories::InMemoryUserRepository;
use catalog_service::outbound::repositories::PostgresProductRepository;
use catalog_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        persistent = config.database.url.is_some(),
        token_lifetime_seconds = config.jwt.expires_in_seconds,
        hash_cost = config.password.hash_cost,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(&config.auth_settings())?);

    let user_service: Arc<dyn UserServicePort>;
    let product_service: Arc<dyn ProductServicePort>;

    match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()).await?);
            let product_repository = Arc::new(PostgresProductRepository::new(pg_pool).await?);
            tracing::info!(database = "postgresql", "Database schema ready");

            user_service = Arc::new(UserService::new(user_repository, Arc::clone(&authenticator)));
            product_service = Arc::new(ProductService::new(product_repository));
        }
        None => {
            tracing::warn!("No database configured, data is kept in memory only");

            user_service = Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::clone(&authenticator),
            ));
            product_service = Arc::new(ProductService::new(Arc::new(
                InMemoryProductRepository::new(),
            )));
        }
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, product_service, authenticator);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
