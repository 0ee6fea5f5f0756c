//! Repository URL parsing.

use serde::{Deserialize, Serialize};
use url::Url;

/// The one git forge the demo accepts.
pub const SUPPORTED_HOST: &str = "github.com";

/// Branch reported for every parsed repository.
pub const DEFAULT_BRANCH: &str = "main";

/// A repository reference parsed from a user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Original URL as submitted
    pub url: String,

    /// Repository owner (second-to-last path segment)
    pub owner: String,

    /// Repository name, with any trailing `.git` stripped
    pub name: String,

    /// Branch the docs would be built from
    pub branch: String,
}

/// Errors produced while parsing a repository URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoUrlError {
    #[error("repository_url is required")]
    Missing,

    #[error("repository URL is not a valid URL")]
    Malformed,

    #[error("only github.com repositories are supported in this demo")]
    UnsupportedHost,

    #[error("repository URL must include an owner and a repository name")]
    MissingSegments,
}

impl RepoRef {
    /// Parse a repository URL of the form `https://github.com/<owner>/<repo>`.
    ///
    /// A trailing slash and a trailing `.git` suffix are accepted and
    /// stripped. Deeper paths keep only the last two segments.
    pub fn parse(repository_url: &str) -> Result<Self, RepoUrlError> {
        let trimmed = repository_url.trim();
        if trimmed.is_empty() {
            return Err(RepoUrlError::Missing);
        }

        let parsed = Url::parse(trimmed).map_err(|_| RepoUrlError::Malformed)?;

        if parsed.host_str() != Some(SUPPORTED_HOST) {
            return Err(RepoUrlError::UnsupportedHost);
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        if segments.len() < 2 {
            return Err(RepoUrlError::MissingSegments);
        }

        let owner = segments[segments.len() - 2];
        let raw_name = segments[segments.len() - 1];
        let name = raw_name.strip_suffix(".git").unwrap_or(raw_name);

        if name.is_empty() {
            return Err(RepoUrlError::MissingSegments);
        }

        Ok(Self {
            url: trimmed.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        })
    }

    /// Derive the hosted documentation URL for this repository.
    ///
    /// Pure function of `(owner, name)` for a given domain, so resubmitting
    /// the same repository always points at the same site.
    pub fn documentation_url(&self, docs_domain: &str) -> String {
        format!("https://{}-{}.{}", self.owner, self.name, docs_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_owner_and_name() {
        let repo = RepoRef::parse("https://github.com/acme/widgets").unwrap();

        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
        assert_eq!(repo.branch, "main");
        assert_eq!(repo.url, "https://github.com/acme/widgets");
    }

    #[test]
    fn strips_trailing_git_suffix() {
        let repo = RepoRef::parse("https://github.com/acme/widgets.git").unwrap();

        assert_eq!(repo.name, "widgets");
    }

    #[test]
    fn accepts_trailing_slash() {
        let repo = RepoRef::parse("https://github.com/acme/widgets/").unwrap();

        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
    }

    #[test]
    fn keeps_git_elsewhere_in_the_name() {
        let repo = RepoRef::parse("https://github.com/acme/widgets.github.io").unwrap();

        assert_eq!(repo.name, "widgets.github.io");
    }

    #[test]
    fn takes_last_two_segments_of_deeper_paths() {
        let repo = RepoRef::parse("https://github.com/org/group/project").unwrap();

        assert_eq!(repo.owner, "group");
        assert_eq!(repo.name, "project");
    }

    #[test]
    fn rejects_empty_url() {
        assert_eq!(RepoRef::parse(""), Err(RepoUrlError::Missing));
        assert_eq!(RepoRef::parse("   "), Err(RepoUrlError::Missing));
    }

    #[test]
    fn rejects_unsupported_host() {
        assert_eq!(
            RepoRef::parse("https://gitlab.com/acme/widgets"),
            Err(RepoUrlError::UnsupportedHost)
        );
    }

    #[test]
    fn rejects_url_without_a_repository() {
        assert_eq!(
            RepoRef::parse("https://github.com/acme"),
            Err(RepoUrlError::MissingSegments)
        );
        assert_eq!(
            RepoRef::parse("https://github.com/"),
            Err(RepoUrlError::MissingSegments)
        );
    }

    #[test]
    fn rejects_non_urls() {
        assert_eq!(RepoRef::parse("not a url"), Err(RepoUrlError::Malformed));
    }

    #[test]
    fn documentation_url_is_a_pure_function_of_owner_and_name() {
        let a = RepoRef::parse("https://github.com/acme/widgets").unwrap();
        let b = RepoRef::parse("https://github.com/acme/widgets.git").unwrap();

        assert_eq!(
            a.documentation_url("docify.dev"),
            "https://acme-widgets.docify.dev"
        );
        assert_eq!(
            a.documentation_url("docify.dev"),
            b.documentation_url("docify.dev")
        );
    }
}
