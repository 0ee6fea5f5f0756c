//! Smoke checks against a running demo server.
//!
//! The HTTP-level answer to "is the demo actually up": hits every endpoint,
//! verifies the response contracts, and prints one line per check.

use std::time::Duration;

use anyhow::Result;
use console::style;
use reqwest::Client;
use serde_json::{json, Value};

const SAMPLE_REPO: &str = "https://github.com/docify-dev/sample-repo";
const UNSUPPORTED_REPO: &str = "https://gitlab.com/docify-dev/sample-repo";

/// Outcome of one smoke check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub failure: Option<String>,
}

impl CheckResult {
    fn pass(name: &'static str) -> Self {
        Self {
            name,
            failure: None,
        }
    }

    fn fail(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            failure: Some(reason.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run all smoke checks and print a styled report.
///
/// Returns an error if any check fails, so the process exits non-zero.
pub async fn run(base_url: &str) -> Result<()> {
    let base_url = base_url.trim_end_matches('/');
    let client = Client::builder()
        .user_agent(concat!("docify-smoke/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("Running smoke checks against {}", style(base_url).cyan());

    let results = run_checks(&client, base_url).await;

    let mut failed = 0;
    for check in &results {
        match &check.failure {
            None => println!("  {} {}", style("PASS").bright().green(), check.name),
            Some(reason) => {
                failed += 1;
                println!(
                    "  {} {}: {}",
                    style("FAIL").bright().red(),
                    check.name,
                    reason
                );
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} smoke checks failed", failed, results.len());
    }

    println!(
        "{}",
        style(format!("All {} checks passed", results.len()))
            .bright()
            .green()
    );
    Ok(())
}

/// Execute every check in order.
///
/// Split from [`run`] so tests can point the suite at a mock server and
/// inspect the outcomes directly.
async fn run_checks(client: &Client, base_url: &str) -> Vec<CheckResult> {
    vec![
        check_health(client, base_url).await,
        check_system_status(client, base_url).await,
        check_landing_page(client, base_url).await,
        check_generate_roundtrip(client, base_url).await,
        check_missing_url_rejected(client, base_url).await,
        check_unsupported_host_rejected(client, base_url).await,
    ]
}

async fn check_health(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "health endpoint";

    let response = match client.get(format!("{base_url}/health")).send().await {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 200 {
        return CheckResult::fail(NAME, format!("expected 200, got {}", response.status()));
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return CheckResult::fail(NAME, format!("invalid JSON: {e}")),
    };

    if body["status"] != "healthy" {
        return CheckResult::fail(NAME, format!("unexpected status field: {}", body["status"]));
    }

    CheckResult::pass(NAME)
}

async fn check_system_status(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "system status endpoint";

    let response = match client.get(format!("{base_url}/api/v1/status")).send().await {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 200 {
        return CheckResult::fail(NAME, format!("expected 200, got {}", response.status()));
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return CheckResult::fail(NAME, format!("invalid JSON: {e}")),
    };

    let Some(success_rate) = body["performance_metrics"]["success_rate"].as_f64() else {
        return CheckResult::fail(NAME, "missing performance_metrics.success_rate");
    };

    if !(0.0..=100.0).contains(&success_rate) {
        return CheckResult::fail(NAME, format!("success_rate out of range: {success_rate}"));
    }

    CheckResult::pass(NAME)
}

async fn check_landing_page(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "landing page";

    let response = match client.get(format!("{base_url}/")).send().await {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 200 {
        return CheckResult::fail(NAME, format!("expected 200, got {}", response.status()));
    }

    let html = match response.text().await {
        Ok(html) => html,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if !html.contains("Docify") {
        return CheckResult::fail(NAME, "page does not mention Docify");
    }

    CheckResult::pass(NAME)
}

async fn check_generate_roundtrip(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "generate and poll round trip";

    let request = json!({
        "repository_url": SAMPLE_REPO,
        "include_ai_summaries": true,
        "generate_search_index": true,
    });

    let response = match client
        .post(format!("{base_url}/api/v1/generate"))
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 200 {
        return CheckResult::fail(NAME, format!("generate returned {}", response.status()));
    }

    let accepted: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return CheckResult::fail(NAME, format!("invalid JSON: {e}")),
    };

    let Some(job_id) = accepted["job_id"].as_str().filter(|id| !id.is_empty()) else {
        return CheckResult::fail(NAME, "generate response is missing job_id");
    };

    if accepted["repository"]["owner"] != "docify-dev"
        || accepted["repository"]["name"] != "sample-repo"
    {
        return CheckResult::fail(NAME, format!("unexpected repository: {}", accepted["repository"]));
    }

    let docs_url = accepted["documentation_url"].as_str().unwrap_or_default();
    if !docs_url.contains("docify-dev-sample-repo") {
        return CheckResult::fail(NAME, format!("unexpected documentation_url: {docs_url}"));
    }

    let response = match client
        .get(format!("{base_url}/api/v1/generate/{job_id}"))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 200 {
        return CheckResult::fail(NAME, format!("status poll returned {}", response.status()));
    }

    let polled: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return CheckResult::fail(NAME, format!("invalid JSON: {e}")),
    };

    if polled["job_id"] != job_id {
        return CheckResult::fail(NAME, format!("status echoed wrong job_id: {}", polled["job_id"]));
    }

    if !polled["progress"].as_u64().is_some_and(|p| p <= 100) {
        return CheckResult::fail(NAME, format!("bad progress value: {}", polled["progress"]));
    }

    CheckResult::pass(NAME)
}

async fn check_missing_url_rejected(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "missing repository_url rejected";

    let response = match client
        .post(format!("{base_url}/api/v1/generate"))
        .json(&json!({}))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 400 {
        return CheckResult::fail(NAME, format!("expected 400, got {}", response.status()));
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => return CheckResult::fail(NAME, format!("invalid JSON: {e}")),
    };

    if !body["detail"]
        .as_str()
        .is_some_and(|detail| detail.contains("required"))
    {
        return CheckResult::fail(NAME, format!("detail does not mention required: {}", body["detail"]));
    }

    CheckResult::pass(NAME)
}

async fn check_unsupported_host_rejected(client: &Client, base_url: &str) -> CheckResult {
    const NAME: &str = "unsupported host rejected";

    let response = match client
        .post(format!("{base_url}/api/v1/generate"))
        .json(&json!({ "repository_url": UNSUPPORTED_REPO }))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(NAME, e.to_string()),
    };

    if response.status() != 400 {
        return CheckResult::fail(NAME, format!("expected 400, got {}", response.status()));
    }

    CheckResult::pass(NAME)
}
