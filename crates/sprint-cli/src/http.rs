//! HTTP JSON API over the planner.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use sprint_core::{GeneratedPlan, PhaseDefinition, catalog, generate_plan};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::request::{PlanRequest, RequestError};

#[derive(Debug, Deserialize)]
struct PlanQuery {
    topic: Option<String>,
    /// Kept as text so non-numeric input gets the validation message.
    days: Option<String>,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/phases", get(list_phases))
        .route("/api/plan", get(create_plan))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(config)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_phases() -> Json<&'static [PhaseDefinition]> {
    Json(catalog())
}

async fn create_plan(
    State(config): State<Arc<Config>>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<Json<GeneratedPlan>, Response> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("malformed plan query: {rejection}");
        error_response(rejection.status(), rejection.body_text())
    })?;
    let topic = query.topic.unwrap_or_default();
    let request = match query.days {
        Some(raw) => PlanRequest::parse(&topic, &raw),
        None => PlanRequest::new(&topic, f64::from(config.default_days)),
    }
    .inspect_err(|e| tracing::debug!("rejected plan request: {e}"))
    .map_err(IntoResponse::into_response)?;

    let plan = generate_plan(&request.topic, i64::from(request.days));
    tracing::info!(topic = %plan.topic, days = plan.total_days, "served plan");
    Ok(Json(plan))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let bind = config.bind.clone();
    let app = router(Arc::new(config));
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!("listening on {bind}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down HTTP server");
        })
        .await
        .context("HTTP server failed")
}
