use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    models::{Activity, ErrorDetail, MessageResponse},
};

#[derive(Debug, serde::Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 307, description = "Redirect to the static signup page")),
    tag = "activities"
)]
pub async fn root() -> impl IntoResponse {
    Redirect::temporary("/static/index.html")
}

#[utoipa::path(get, path = "/healthz/live", tag = "activities")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "activities")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activity name to record map", body = std::collections::BTreeMap<String, Activity>)
    ),
    tag = "activities"
)]
pub async fn get_activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.directory.snapshot().await)
}

#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity name (percent-encoded if it contains spaces)"),
        ("email" = String, Query, description = "Student email to sign up")
    ),
    responses(
        (status = 200, description = "Signed up", body = MessageResponse),
        (status = 400, description = "Student already signed up or activity full", body = ErrorDetail),
        (status = 404, description = "Unknown activity", body = ErrorDetail)
    ),
    tag = "activities"
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.directory.signup(&activity_name, &query.email).await?;
    info!("Signed up {} for {activity_name}", query.email);

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {activity_name}", query.email),
    }))
}

#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Activity name (percent-encoded if it contains spaces)"),
        ("email" = String, Query, description = "Student email to unregister")
    ),
    responses(
        (status = 200, description = "Unregistered", body = MessageResponse),
        (status = 400, description = "Student not signed up", body = ErrorDetail),
        (status = 404, description = "Unknown activity", body = ErrorDetail)
    ),
    tag = "activities"
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .directory
        .unregister(&activity_name, &query.email)
        .await?;
    info!("Unregistered {} from {activity_name}", query.email);

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {activity_name}", query.email),
    }))
}
