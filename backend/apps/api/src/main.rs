//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the feature
//! crates' domain errors mapped through `kernel::error::AppError`.

use accounts::{PgAccountStore, users_router};
use articles::{PgArticleStore, articles_router};
use axum::{
    Json, Router, http,
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use platform::token::{DEFAULT_TOKEN_TTL, TokenService};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,accounts=info,articles=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Bearer tokens: 7-day lifetime, HMAC secret from the environment.
    // Debug builds fall back to a random secret.
    let tokens = Arc::new(match env::var("TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&secret_bytes);
            TokenService::new(secret, DEFAULT_TOKEN_TTL)
        }
        Err(_) if cfg!(debug_assertions) => TokenService::with_random_secret(DEFAULT_TOKEN_TTL),
        Err(_) => panic!("TOKEN_SECRET must be set in production"),
    });

    let accounts_store = PgAccountStore::new(pool.clone());
    let articles_store = PgArticleStore::new(pool.clone());

    // Startup bootstrap: seed an admin account when configured.
    // Errors here should not prevent server startup.
    if let (Ok(email), Ok(password)) = (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        match bootstrap_admin(&accounts_store, &email, &password, env::var("ADMIN_NAME").ok())
            .await
        {
            Ok(true) => tracing::info!(email = %email, "Admin account created"),
            Ok(false) => tracing::debug!("Admin account already present"),
            Err(e) => tracing::warn!(error = %e, "Admin bootstrap failed, continuing anyway"),
        }
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| {
        "http://localhost:3000,http://localhost:5173,http://127.0.0.1:5173".to_string()
    });

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .nest(
            "/api/users",
            users_router(accounts_store.clone(), tokens.clone()),
        )
        .nest(
            "/api/articles",
            articles_router(articles_store, accounts_store, tokens),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    }))
}

/// JSON 404 for unknown routes
async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "message": format!("Route {} not found", uri.path()),
        })),
    )
}

/// Create the configured admin account unless its email is already taken.
/// Returns whether an account was created.
async fn bootstrap_admin(
    store: &PgAccountStore,
    email: &str,
    password: &str,
    name: Option<String>,
) -> anyhow::Result<bool> {
    use accounts::domain::entity::user::User;
    use accounts::domain::repository::UserRepository;
    use accounts::domain::value_object::{email::Email, user_role::UserRole};
    use platform::password::PlainPassword;

    let email = Email::new(email)?;

    if store.exists_by_email(&email).await? {
        return Ok(false);
    }

    let password_hash = PlainPassword::new(password)?.hash()?;

    let mut admin = User::new(
        name.unwrap_or_else(|| "Admin User".to_string()),
        email,
        password_hash,
    );
    admin.role = UserRole::Admin;

    store.create(&admin).await?;

    Ok(true)
}
