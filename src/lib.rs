pub mod directory;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod seed;
pub mod settings;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use handlers::{
    get_activities, healthz_live, healthz_ready, root, signup_for_activity,
    unregister_from_activity,
};
use tower_http::LatencyUnit;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::directory::ActivityDirectory;
use crate::openapi::ApiDoc;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub directory: Arc<ActivityDirectory>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let activities = match &settings.activities_file {
        Some(path) => seed::load_activities(Path::new(path))?,
        None => seed::default_activities(),
    };
    info!("Seeded {} activities", activities.len());

    let state = AppState {
        directory: Arc::new(ActivityDirectory::new(
            activities,
            settings.enforce_capacity,
        )),
        settings: settings.clone(),
    };

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Mergington High School Activities API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/activities", get(get_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(&state.settings.static_dir))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
