//! Demo API server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

/// Response-shape tier, replacing the two separate demo servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Standard,
    Premium,
}

impl Tier {
    pub fn is_premium(self) -> bool {
        matches!(self, Tier::Premium)
    }
}

/// Configuration for the demo server.
///
/// Constructed once at startup and passed into handlers through the shared
/// state; nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Response-shape tier
    pub tier: Tier,

    /// Domain the derived documentation URLs point at
    pub docs_domain: String,

    /// Gemini API key, read once at startup; absence only disables the AI flag
    pub gemini_api_key: Option<String>,

    /// Cosmetic pause before answering the job endpoints
    pub response_delay: Option<Duration>,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            tier: Tier::default(),
            docs_domain: "docify.dev".to_string(),
            gemini_api_key: None,
            response_delay: None,
            open: false,
        }
    }
}

impl ServeConfig {
    /// Whether AI summaries are available for this process.
    pub fn ai_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Errors that can occur while running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    AddrError(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// The demo API server.
pub struct ApiServer {
    config: ServeConfig,
}

impl ApiServer {
    /// Create a new server from its configuration.
    pub fn new(config: ServeConfig) -> Self {
        Self { config }
    }

    /// Start the server and serve until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let listen = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = listen
            .parse()
            .map_err(|_| ServerError::AddrError(listen))?;

        let open_browser = self.config.open;
        let premium = self.config.tier.is_premium();
        let app = router(Arc::new(AppState::new(self.config)));

        tracing::info!("Starting Docify demo server at http://{}", addr);
        tracing::info!("Landing page: http://{}/", addr);
        tracing::info!("Health check: http://{}/health", addr);
        if premium {
            tracing::info!("Premium response shapes enabled");
        }

        if open_browser {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
///
/// Split from [`ApiServer::start`] so tests can drive the full HTTP surface
/// without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    // The demo UI may be served from anywhere, so CORS stays wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/health", get(handlers::health_check))
        .route("/api/v1/generate", post(handlers::generate_documentation))
        .route("/api/v1/generate/{job_id}", get(handlers::generation_status))
        .route("/api/v1/status", get(handlers::system_status))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState::new(ServeConfig::default())))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn default_config_binds_the_demo_port() {
        let server = ApiServer::new(ServeConfig::default());
        assert_eq!(server.config.port, 8000);
        assert_eq!(server.config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(
            body["performance_constraints"]["max_memory_usage_mb"],
            512
        );
    }

    #[tokio::test]
    async fn landing_page_serves_html() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Docify"));
    }

    #[tokio::test]
    async fn missing_repository_url_is_a_400() {
        let request = Request::post("/api/v1/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn unsupported_host_is_a_400() {
        let request = Request::post("/api/v1/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"repository_url": "https://gitlab.com/acme/widgets"}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_and_poll_over_http() {
        let app = app();

        let request = Request::post("/api/v1/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"repository_url": "https://github.com/acme/widgets"}"#,
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let accepted = json_body(response).await;
        assert_eq!(accepted["repository"]["owner"], "acme");
        assert_eq!(accepted["repository"]["name"], "widgets");
        assert_eq!(accepted["status"], "pending");
        assert_eq!(
            accepted["documentation_url"],
            "https://acme-widgets.docify.dev"
        );

        let job_id = accepted["job_id"].as_str().unwrap();
        let response = app
            .oneshot(
                Request::get(format!("/api/v1/generate/{job_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let polled = json_body(response).await;
        assert_eq!(polled["job_id"], job_id);
        assert!(polled["progress"].as_u64().unwrap() <= 100);
    }

    #[tokio::test]
    async fn unknown_job_is_a_404_over_http() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/generate/no-such-job")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn system_status_reports_metrics() {
        let response = app()
            .oneshot(Request::get("/api/v1/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let success_rate = body["performance_metrics"]["success_rate"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&success_rate));
    }
}
