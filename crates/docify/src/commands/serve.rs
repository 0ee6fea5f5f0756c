//! Demo server command.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use docify_server::{ApiServer, ServeConfig, Tier};

/// Configuration file structure (docify.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSettings,
}

#[derive(Debug, Deserialize, Default)]
struct ServerSettings {
    host: Option<String>,
    port: Option<u16>,
    premium: Option<bool>,
    docs_domain: Option<String>,
    delay_ms: Option<u64>,
}

/// Load configuration from docify.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// CLI overrides for the serve command.
#[derive(Debug, Default)]
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub premium: bool,
    pub open: bool,
    pub delay_ms: Option<u64>,
}

/// Resolve flags, config file, and defaults into a server configuration.
///
/// Flags win over the file; the file wins over defaults. The API key is
/// taken from the caller so this stays free of environment reads.
fn resolve_config(
    args: ServeArgs,
    file: ConfigFile,
    gemini_api_key: Option<String>,
) -> ServeConfig {
    let defaults = ServeConfig::default();
    let premium = args.premium || file.server.premium.unwrap_or(false);

    ServeConfig {
        host: args.host.or(file.server.host).unwrap_or(defaults.host),
        port: args.port.or(file.server.port).unwrap_or(defaults.port),
        tier: if premium { Tier::Premium } else { Tier::Standard },
        docs_domain: file.server.docs_domain.unwrap_or(defaults.docs_domain),
        gemini_api_key,
        response_delay: args
            .delay_ms
            .or(file.server.delay_ms)
            .map(Duration::from_millis),
        open: args.open,
    }
}

/// Run the serve command.
pub async fn run(config_path: &Path, args: ServeArgs) -> Result<()> {
    let file = load_config(config_path)?;

    // The API key is read once here; handlers only ever see the config struct.
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    if gemini_api_key.is_some() {
        tracing::info!("Gemini AI: configured");
    } else {
        tracing::warn!("Gemini AI: not configured (set GEMINI_API_KEY); AI summaries disabled");
    }

    let config = resolve_config(args, file, gemini_api_key);

    ApiServer::new(config).start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_and_defaults() {
        let args = ServeArgs {
            port: Some(9000),
            premium: true,
            ..Default::default()
        };
        let file = ConfigFile {
            server: ServerSettings {
                host: Some("0.0.0.0".to_string()),
                port: Some(8080),
                ..Default::default()
            },
        };

        let config = resolve_config(args, file, None);

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.tier, Tier::Premium);
        assert!(!config.ai_enabled());
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let config = resolve_config(ServeArgs::default(), ConfigFile::default(), None);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.tier, Tier::Standard);
        assert_eq!(config.docs_domain, "docify.dev");
        assert_eq!(config.response_delay, None);
    }

    #[test]
    fn file_settings_fill_in_missing_flags() {
        let file: ConfigFile = toml::from_str(
            r#"
[server]
port = 8100
premium = true
docs_domain = "docs.example.com"
delay_ms = 250
"#,
        )
        .unwrap();

        let config = resolve_config(ServeArgs::default(), file, Some("key".to_string()));

        assert_eq!(config.port, 8100);
        assert_eq!(config.tier, Tier::Premium);
        assert_eq!(config.docs_domain, "docs.example.com");
        assert_eq!(config.response_delay, Some(Duration::from_millis(250)));
        assert!(config.ai_enabled());
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let missing = Path::new("definitely-not-here/docify.toml");
        let file = load_config(missing).unwrap();

        assert!(file.server.port.is_none());
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docify.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
