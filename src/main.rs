use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth_api::routes::create_router;
use auth_api::shared::config::AppConfig;
use auth_api::shared::database::Database;
use auth_api::shared::services::AppState;

use auth_api::domains::auth::models::*;
use auth_api::domains::bmi::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth_api::domains::auth::handlers::auth_handler::register,
        auth_api::domains::auth::handlers::auth_handler::login,
        auth_api::domains::auth::handlers::auth_handler::profile,
        auth_api::domains::auth::handlers::auth_handler::change_password,
        auth_api::domains::auth::handlers::auth_handler::admin_panel,
        auth_api::domains::bmi::handlers::bmi_handler::calculate,
        auth_api::domains::bmi::handlers::bmi_handler::my_bmi,
        auth_api::domains::bmi::handlers::bmi_handler::all_users_bmi,
        auth_api::domains::bmi::handlers::bmi_handler::statistics
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        ChangePasswordRequest,
        UserResponse,
        UserStatistics,
        AdminPanelResponse,
        Role,
        BmiRequest,
        BmiResponse,
        BmiResult,
        AdminBmiEntry,
        AdminBmiListResponse,
        GenderDistribution,
        CategoryCount,
        BmiStatistics
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and account management"),
        (name = "BMI", description = "Per-user BMI tracking and admin reporting")
    ),
    info(
        title = "Auth API",
        description = "User registration/login with JWT authentication and per-user BMI tracking",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Adds the "Authorize" button to Swagger UI
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Configuration is validated before anything else: a missing signing
    // key stops the process here, not on the first request
    let config = AppConfig::from_env().context("invalid configuration")?;

    let db = Database::new(&config.database_url)
        .await
        .context("failed to connect to database")?;

    db.initialize()
        .await
        .context("failed to initialize database")?;

    let app_state =
        AppState::new(db, config.jwt.clone()).context("failed to initialize application state")?;

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("invalid CORS_ORIGIN")?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "server listening");
    tracing::info!("Swagger UI available at /api");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
