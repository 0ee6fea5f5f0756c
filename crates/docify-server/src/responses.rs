//! Request and response documents for the JSON API.

use serde::{Deserialize, Serialize};

use docify_core::metrics::{
    CompletedBuildStats, PerformanceConstraints, PerformanceMetrics, SystemResources,
};
use docify_core::{JobOptions, JobStatus, RepoRef};

/// Body of `POST /api/v1/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub repository_url: Option<String>,

    #[serde(default)]
    pub include_ai_summaries: Option<bool>,

    #[serde(default)]
    pub generate_search_index: Option<bool>,
}

/// Response of `POST /api/v1/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub job_id: String,
    pub repository: RepoRef,
    pub status: JobStatus,
    pub documentation_url: String,
    pub estimated_completion_seconds: u64,
    pub options: JobOptions,
}

/// Response of `GET /api/v1/generate/{job_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub repository: RepoRef,
    pub documentation_url: String,

    /// Build figures, present once the job is completed
    #[serde(flatten)]
    pub completed: Option<CompletedBuildStats>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub ai_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_features: Option<bool>,

    pub performance_constraints: PerformanceConstraints,
}

/// Response of `GET /api/v1/status`.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatusResponse {
    pub status: &'static str,
    pub active_builds: usize,
    pub performance_metrics: PerformanceMetrics,
    pub system_resources: SystemResources,

    /// Premium-only feature flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,

    /// Premium-only published tier limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<serde_json::Value>,
}
