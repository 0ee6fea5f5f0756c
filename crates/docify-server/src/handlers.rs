//! Request handlers for the demo API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use docify_core::metrics;
use docify_core::{JobOptions, JobRecord, JobStatus, RepoRef, ESTIMATED_COMPLETION_SECONDS};

use crate::error::ApiError;
use crate::responses::{
    GenerateRequest, GenerateResponse, HealthResponse, JobStatusResponse, SystemStatusResponse,
};
use crate::server::ServeConfig;
use crate::state::AppState;

/// `GET /` - the demo landing page.
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    match state.templates.render_landing(&state.config) {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::error!("Failed to render landing page: {}", e);
            Html("<h1>Docify</h1>".to_string())
        }
    }
}

/// `GET /health` - liveness probe with the documented operating limits.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let premium = state.config.tier.is_premium();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        ai_enabled: state.config.ai_enabled(),
        ai_provider: premium.then_some("gemini"),
        premium_features: premium.then_some(true),
        performance_constraints: metrics::PERFORMANCE_CONSTRAINTS,
    })
}

/// `POST /api/v1/generate` - submit a simulated documentation build.
pub async fn generate_documentation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    pace(&state).await;

    let url = body.repository_url.as_deref().unwrap_or_default();
    let repository = RepoRef::parse(url)?;

    let options = JobOptions {
        include_ai_summaries: body.include_ai_summaries.unwrap_or(true),
        generate_search_index: body.generate_search_index.unwrap_or(true),
    };

    let record = JobRecord::new(repository, options, state.store.now_unix());
    let documentation_url = record
        .repository
        .documentation_url(&state.config.docs_domain);

    tracing::info!(
        job_id = %record.job_id,
        repository = %record.repository.url,
        "Accepted documentation build request"
    );

    let response = GenerateResponse {
        job_id: record.job_id.clone(),
        repository: record.repository.clone(),
        status: JobStatus::Pending,
        documentation_url,
        estimated_completion_seconds: ESTIMATED_COMPLETION_SECONDS,
        options: record.options,
    };

    state.store.insert(record).await;

    Ok(Json(response))
}

/// `GET /api/v1/generate/{job_id}` - poll a simulated build.
pub async fn generation_status(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Result<Json<JobStatusResponse>, ApiError> {
    pace(&state).await;

    let record = state.store.get(&job_id).await.ok_or(ApiError::NotFound)?;

    let now = state.store.now_unix();
    let status = record.status_at(now);
    let progress = record.progress_at(now);
    let documentation_url = record
        .repository
        .documentation_url(&state.config.docs_domain);

    Ok(Json(JobStatusResponse {
        job_id: record.job_id,
        status,
        progress,
        repository: record.repository,
        documentation_url,
        completed: status
            .is_terminal()
            .then_some(metrics::COMPLETED_BUILD_STATS),
    }))
}

/// `GET /api/v1/status` - fabricated system metrics snapshot.
pub async fn system_status(State(state): State<Arc<AppState>>) -> Json<SystemStatusResponse> {
    let premium = state.config.tier.is_premium();

    Json(SystemStatusResponse {
        status: "healthy",
        active_builds: state.store.active_count().await,
        performance_metrics: metrics::PERFORMANCE_METRICS,
        system_resources: metrics::SYSTEM_RESOURCES,
        features: premium.then(|| premium_features(&state.config)),
        limits: premium.then(premium_limits),
    })
}

/// Optional cosmetic pause so the demo UI can show its progress states.
async fn pace(state: &AppState) {
    if let Some(delay) = state.config.response_delay {
        tokio::time::sleep(delay).await;
    }
}

/// Premium feature flags. Fixture data, apart from the AI flag which
/// reflects whether an API key was present at startup.
fn premium_features(config: &ServeConfig) -> serde_json::Value {
    json!({
        "gemini_ai": config.ai_enabled(),
        "premium_hosting": true,
        "advanced_analytics": true,
        "custom_domains": true,
        "priority_support": true,
    })
}

/// Published per-tier limits. Fixture data, not enforced anywhere.
fn premium_limits() -> serde_json::Value {
    json!({
        "free_tier": {
            "repositories": 5,
            "builds_per_hour": 10,
            "ai_summaries": false,
        },
        "pro_tier": {
            "repositories": "unlimited_public",
            "private_repositories": 50,
            "builds_per_hour": 100,
            "ai_summaries": true,
            "custom_domains": true,
        },
        "enterprise_tier": {
            "repositories": "unlimited",
            "builds_per_hour": "unlimited",
            "ai_summaries": true,
            "custom_domains": true,
            "sso_integration": true,
            "dedicated_support": true,
        },
    })
}
