use rest_api::build_router;
use rest_api::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "rest_api=debug,user_feature=debug,domain=debug,tower_http=debug,sqlx=warn".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!(max_connections = config.max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../migrations").run(&pool).await?;

    info!("Migrations complete");

    let app = build_router(pool);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    info!("Users endpoint: http://{}/users", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
