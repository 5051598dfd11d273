use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use arcanostore_admin::api_docs::ApiDoc;
use arcanostore_admin::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcanostore_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // A database that never comes up must not kill the process: the service
    // keeps serving and every store-backed endpoint answers 503
    let state = match db::init_db(&config.database_url).await {
        Ok(conn) => {
            if std::env::var("SEED_DEMO").is_ok() {
                tracing::info!("Seeding demo data...");
                if let Err(e) = seed::seed_demo_data(&conn).await {
                    tracing::error!("Failed to seed data: {}", e);
                } else {
                    tracing::info!("Demo data seeded successfully.");
                }
            }
            db::AppState::new(conn, config.limits)
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to {}: {} - continuing in degraded mode",
                config.database_url,
                e
            );
            db::AppState::disconnected(config.limits)
        }
    };

    let app = server::build_router(state, &config.cors_allowed_origins)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("ArcanoStore admin server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
