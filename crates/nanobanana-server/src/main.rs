use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{
    storage::UPLOAD_ROUTE, ImgbbHost, PgElementRepository, TogetherImageGenerator, UploadStorage,
};
use application::{ElementService, ImageService};
use config::ServerConfig;
use nanobanana::{ImageGenerator, ImageHost};

/// Type aliases for application services with concrete repository implementations
pub type AppElementService = ElementService<PgElementRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub element_service: Arc<AppElementService>,
    pub image_service: Arc<ImageService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Nano Banana API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn root() -> &'static str {
    "OK"
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let Some(origin) = origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        Err(e) => {
            tracing::warn!("Ignoring invalid CORS_ORIGIN {:?}: {}", origin, e);
            CorsLayer::permissive()
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🍌 Nano Banana API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;

    if config.api_keys.is_empty() {
        tracing::warn!(
            "⚠️  No API_KEYS set - authentication disabled, acting as '{}'",
            auth::LOCAL_USER
        );
    } else {
        tracing::info!("🔐 API key authentication enabled ({} key(s))", config.api_keys.len());
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Image generation backend
    let generator = config.together_api_key.clone().map(|key| {
        tracing::info!("🎨 Image generation initialized ({})", config.image_model);
        let generator = TogetherImageGenerator::new(key, config.image_model.clone());
        let generator = match &config.together_base_url {
            Some(url) => generator.with_base_url(url.clone()),
            None => generator,
        };
        Arc::new(generator) as Arc<dyn ImageGenerator>
    });

    if generator.is_none() {
        tracing::warn!("⚠️  No TOGETHER_API_KEY set - image generation disabled");
    }

    // Image hosting for elements
    let host = config.imgbb_api_key.clone().map(|key| {
        tracing::info!("🖼️  Image hosting initialized (imgbb)");
        Arc::new(ImgbbHost::new(key)) as Arc<dyn ImageHost>
    });

    if host.is_none() {
        tracing::warn!("⚠️  No IMGBB_API_KEY set - element creation disabled");
    }

    // Initialize application services
    let storage = UploadStorage::new(config.upload_dir.clone());
    let element_repo = Arc::new(PgElementRepository::new(pool));
    let element_service = Arc::new(ElementService::new(element_repo, host));
    let image_service = Arc::new(ImageService::new(generator, storage.clone()));

    let state = AppState {
        element_service,
        image_service,
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::element::router())
        .merge(routes::image::router())
        .merge(routes::prompt::router())
        .layer(middleware::from_fn_with_state(
            Arc::new(config.api_keys.clone()),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::resolution::router())
        .merge(protected_routes)
        .nest_service(UPLOAD_ROUTE, ServeDir::new(storage.dir()))
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("📁 Generated images: {} -> {}", UPLOAD_ROUTE, storage.dir().display());
    tracing::info!("✅ Nano Banana API ready");

    Ok(router.into())
}
