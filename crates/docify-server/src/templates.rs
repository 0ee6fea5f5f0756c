//! Landing page templates.

use minijinja::{context, Environment};

use crate::server::{ServeConfig, Tier};

/// Template engine with the embedded demo pages.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("landing.html".to_string(), LANDING_TEMPLATE.to_string())
            .expect("Failed to add landing template");

        Self { env }
    }

    /// Render the landing page for the configured tier.
    pub fn render_landing(&self, config: &ServeConfig) -> Result<String, minijinja::Error> {
        let template = self.env.get_template("landing.html")?;

        template.render(context! {
            version => env!("CARGO_PKG_VERSION"),
            premium => config.tier.is_premium(),
            ai_enabled => config.ai_enabled(),
            user_tier => match config.tier {
                Tier::Premium => "Pro",
                Tier::Standard => "Free",
            },
            requests_per_minute => 100,
            builds_per_hour => 50,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const LANDING_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Docify - Git-to-Docs Platform</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      color: white;
    }
    .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
    .hero { text-align: center; padding: 4rem 0; }
    .hero h1 { font-size: 3.5rem; margin-bottom: 1rem; font-weight: 700; }
    .hero p { font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.9; }
    .badge {
      display: inline-block;
      background: #FFD700;
      color: #333;
      padding: 0.25rem 1rem;
      border-radius: 999px;
      font-weight: 600;
    }
    .demo-section {
      background: rgba(255,255,255,0.1);
      border-radius: 12px;
      padding: 2rem;
      margin: 2rem 0;
      backdrop-filter: blur(10px);
    }
    .input-group { margin: 1rem 0; }
    .input-group label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
    .input-group input {
      width: 100%;
      padding: 0.75rem;
      border: none;
      border-radius: 6px;
      font-size: 1rem;
    }
    .btn {
      background: #4CAF50;
      color: white;
      padding: 0.75rem 2rem;
      border: none;
      border-radius: 6px;
      cursor: pointer;
      font-size: 1rem;
      margin: 0.5rem;
    }
    .btn:hover { background: #45a049; }
    .btn-secondary { background: #2196F3; }
    .btn-secondary:hover { background: #1976D2; }
    .result {
      background: rgba(0,0,0,0.2);
      padding: 1rem;
      border-radius: 6px;
      margin-top: 1rem;
      font-family: monospace;
    }
    .features {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 2rem;
      margin: 2rem 0;
    }
    .feature { background: rgba(255,255,255,0.1); padding: 1.5rem; border-radius: 8px; }
    .feature h3 { margin-bottom: 1rem; color: #FFD700; }
    .footer { text-align: center; opacity: 0.7; padding: 2rem 0; }
  </style>
</head>
<body>
  <div class="container">
    <div class="hero">
      <h1>Docify</h1>
      <p>Zero-friction documentation generation from any Git repository</p>
      {% if premium %}
      <p>
        <span class="badge">{{ user_tier }} plan</span>
        {{ requests_per_minute }} requests/min, {{ builds_per_hour }} builds/hour
      </p>
      {% else %}
      <p><em>The "Vercel for Documentation" - instant, beautiful, AI-enhanced</em></p>
      {% endif %}
    </div>

    <div class="demo-section">
      <h2>Try the Demo</h2>
      <div class="input-group">
        <label for="repo-url">Git Repository URL:</label>
        <input type="text" id="repo-url" placeholder="https://github.com/username/repository"
               value="https://github.com/fastapi/fastapi">
      </div>
      <button class="btn" onclick="generateDocs()">Generate Documentation</button>
      <button class="btn btn-secondary" onclick="checkStatus()">Check System Status</button>
      <div id="result" class="result" style="display: none;"></div>
    </div>

    <div class="features">
      <div class="feature">
        <h3>Lightning Fast</h3>
        <p>8-second cold start builds with intelligent caching and optimization</p>
      </div>
      <div class="feature">
        <h3>AI-Enhanced</h3>
        <p>Automatic summaries and explanations for classes and functions</p>
      </div>
      <div class="feature">
        <h3>Smart Search</h3>
        <p>Offline-capable search with instant results across all code elements</p>
      </div>
      <div class="feature">
        <h3>Beautiful UI</h3>
        <p>Three-column layout with dark/light themes and responsive design</p>
      </div>
      <div class="feature">
        <h3>Auto-Sync</h3>
        <p>GitHub Actions integration for automatic documentation updates</p>
      </div>
      <div class="feature">
        <h3>Analytics</h3>
        <p>Privacy-focused usage analytics and search insights</p>
      </div>
    </div>

    <div class="demo-section">
      <h2>API Endpoints</h2>
      <p><strong>POST /api/v1/generate</strong> - Generate documentation from a Git URL</p>
      <p><strong>GET /api/v1/generate/:job_id</strong> - Check generation status</p>
      <p><strong>GET /api/v1/status</strong> - System health and metrics</p>
      <p><strong>GET /health</strong> - Health check</p>
    </div>

    <p class="footer">
      Docify v{{ version }}{% if premium %} - premium demo{% endif %}{% if not ai_enabled %} - AI summaries disabled{% endif %}
    </p>
  </div>

  <script>
    async function generateDocs() {
      const url = document.getElementById('repo-url').value;
      const resultDiv = document.getElementById('result');

      if (!url) {
        alert('Please enter a Git repository URL');
        return;
      }

      resultDiv.style.display = 'block';
      resultDiv.innerHTML = 'Generating documentation...';

      try {
        const response = await fetch('/api/v1/generate', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({
            repository_url: url,
            include_ai_summaries: true,
            generate_search_index: true
          })
        });

        const data = await response.json();

        if (response.ok) {
          resultDiv.innerHTML = `
            <h3>Documentation generation started</h3>
            <p><strong>Job ID:</strong> ${data.job_id}</p>
            <p><strong>Repository:</strong> ${data.repository.owner}/${data.repository.name}</p>
            <p><strong>Status:</strong> ${data.status}</p>
            <p><strong>Documentation URL:</strong> <a href="${data.documentation_url}" target="_blank">${data.documentation_url}</a></p>
            <p><strong>Estimated completion:</strong> ${data.estimated_completion_seconds} seconds</p>
          `;
        } else {
          resultDiv.innerHTML = `<h3>Error</h3><p>${data.detail}</p>`;
        }
      } catch (error) {
        resultDiv.innerHTML = `<h3>Network error</h3><p>${error.message}</p>`;
      }
    }

    async function checkStatus() {
      const resultDiv = document.getElementById('result');
      resultDiv.style.display = 'block';
      resultDiv.innerHTML = 'Checking system status...';

      try {
        const response = await fetch('/api/v1/status');
        const data = await response.json();

        resultDiv.innerHTML = `
          <h3>System Status</h3>
          <p><strong>Status:</strong> ${data.status}</p>
          <p><strong>Active Builds:</strong> ${data.active_builds}</p>
          <p><strong>Queue Length:</strong> ${data.performance_metrics.queue_length}</p>
          <p><strong>Average Build Time:</strong> ${data.performance_metrics.average_build_time_seconds}s</p>
          <p><strong>Success Rate:</strong> ${data.performance_metrics.success_rate}%</p>
        `;
      } catch (error) {
        resultDiv.innerHTML = `<h3>Error</h3><p>${error.message}</p>`;
      }
    }
  </script>
</body>
</html>
"#;
