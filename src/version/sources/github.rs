//! GitHub Releases API source implementation

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{
    DEFAULT_GITHUB_API_URL, DEFAULT_RELEASE_REPO, FETCH_TIMEOUT, RELEASES_PER_PAGE,
};
use crate::version::error::SourceError;
use crate::version::semver::{Version, less, sort_descending};
use crate::version::source::ReleaseSource;

/// Matches the `rel="next"` entry of a `Link` header
static NEXT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([^>]+)>;\s*rel="next""#).expect("valid link regex"));

/// Release object from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    prerelease: bool,
    #[serde(default)]
    draft: bool,
}

impl Release {
    fn version(&self) -> &str {
        self.tag_name.strip_prefix('v').unwrap_or(&self.tag_name)
    }
}

/// One page of the release listing
struct ReleasePage {
    releases: Vec<Release>,
    has_next: bool,
}

/// Release source backed by the GitHub Releases API
pub struct GitHubReleaseSource {
    client: reqwest::Client,
    base_url: String,
    repo: String,
}

impl GitHubReleaseSource {
    /// Creates a source for `repo` ("owner/name") behind a custom base URL
    pub fn new(base_url: &str, repo: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("vc-env")
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, SourceError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!("GitHub API rate limit hit: {}", url);
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(SourceError::UnexpectedStatus(status));
        }

        Ok(response)
    }

    async fn fetch_page(&self, page: u32) -> Result<ReleasePage, SourceError> {
        let url = format!(
            "{}/repos/{}/releases?per_page={}&page={}",
            self.base_url, self.repo, RELEASES_PER_PAGE, page
        );
        debug!("Fetching releases page {}", page);

        let response = self.get(&url).await?;
        let has_next = has_next_page(response.headers());

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(ReleasePage { releases, has_next })
    }

    /// Walk the listing newest-first, stopping at the first release that is
    /// not strictly newer than `anchor` when one is given.
    async fn scan(
        &self,
        anchor: Option<Version>,
        include_prerelease: bool,
    ) -> Result<Vec<String>, SourceError> {
        let mut versions = Vec::new();
        let mut page = 1;

        'pages: loop {
            let ReleasePage { releases, has_next } = self.fetch_page(page).await?;

            for release in &releases {
                if release.draft {
                    continue;
                }

                let tag = release.version();
                let reached_anchor = anchor
                    .as_ref()
                    .is_some_and(|anchor| !less(anchor, &Version::parse(tag)));
                if reached_anchor {
                    debug!("Reached known release {} on page {}", tag, page);
                    break 'pages;
                }

                if release.prerelease && !include_prerelease {
                    continue;
                }
                if !tag.is_empty() {
                    versions.push(tag.to_string());
                }
            }

            if !has_next {
                break;
            }
            page += 1;
        }

        debug!("Collected {} releases from {} page(s)", versions.len(), page);
        Ok(sort_descending(&versions))
    }
}

impl Default for GitHubReleaseSource {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_API_URL, DEFAULT_RELEASE_REPO)
    }
}

fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(reqwest::header::LINK)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|link| NEXT_LINK.is_match(link))
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn list_releases(&self, include_prerelease: bool) -> Result<Vec<String>, SourceError> {
        self.scan(None, include_prerelease).await
    }

    async fn list_releases_since(
        &self,
        anchor: &str,
        include_prerelease: bool,
    ) -> Result<Vec<String>, SourceError> {
        let anchor = (!anchor.is_empty()).then(|| Version::parse(anchor));
        self.scan(anchor, include_prerelease).await
    }

    async fn latest_release(&self) -> Result<String, SourceError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, self.repo);

        let release: Release = self.get(&url).await?.json().await.map_err(|e| {
            warn!("Failed to parse GitHub latest release response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(release.version().to_string())
    }
}
