use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::auth::{credentials::AdminCredentials, sessions::SessionStore};
use middleware::auth::{ApiKeys, AuthState};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::groups::handlers::list_groups,
        features::groups::handlers::create_group,
        features::events::handlers::list_events,
        features::events::handlers::list_upcoming_events,
        features::events::handlers::create_event,
        features::results::handlers::list_results,
        features::results::handlers::list_published_results,
        features::results::handlers::create_result,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::get_criteria,
        features::auth::handlers::sign_in,
        features::auth::handlers::get_session,
        features::auth::handlers::sign_out,
    ),
    components(
        schemas(
            storage::models::Group,
            storage::models::Event,
            storage::models::EventCategory,
            storage::models::EventResult,
            storage::dto::group::NewGroup,
            storage::dto::event::NewEvent,
            storage::dto::result::ScoredResult,
            storage::dto::filter::EventResults,
            storage::dto::filter::ResultWithGroup,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::RankBadge,
            storage::dto::leaderboard::CriteriaRow,
            storage::dto::auth::SignInRequest,
            storage::dto::auth::SessionResponse,
            storage::dto::auth::ErrorBody,
        )
    ),
    tags(
        (name = "groups", description = "Competing groups"),
        (name = "events", description = "Scheduled events"),
        (name = "results", description = "Recorded placements"),
        (name = "leaderboard", description = "Standings and marking criteria"),
        (name = "auth", description = "Admin sign-in"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token or API key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting festival results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let admin = AdminCredentials::new(&config.admin_email, &config.admin_password_hash);
    if !admin.is_configured() {
        tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD_HASH not set, admin sign-in is disabled");
    }

    let auth = AuthState {
        api_keys: Arc::new(ApiKeys::from_comma_separated(&config.api_keys)),
        sessions: SessionStore::new(chrono::Duration::hours(config.session_ttl_hours)),
        admin: Arc::new(admin),
    };

    let app = Router::new()
        .nest("/api", features::api_routes(auth))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
