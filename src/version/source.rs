//! Release source trait for fetching published release tags

#[cfg(test)]
use mockall::automock;

use crate::version::error::SourceError;

/// Trait for listing releases from a remote host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every published release
    ///
    /// Drafts are always skipped; prereleases only when `include_prerelease`
    /// is false. Tags come back without a leading `v`.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Versions ordered from newest to oldest
    /// * `Err(SourceError)` - If any page fails; no partial result is returned
    async fn list_releases(&self, include_prerelease: bool) -> Result<Vec<String>, SourceError>;

    /// Fetches only releases strictly newer than `anchor`
    ///
    /// Relies on the host returning releases newest-first: scanning stops at
    /// the first release that is not newer than `anchor`, prerelease or not,
    /// and no further pages are requested. An empty `anchor` behaves like
    /// [`ReleaseSource::list_releases`].
    async fn list_releases_since(
        &self,
        anchor: &str,
        include_prerelease: bool,
    ) -> Result<Vec<String>, SourceError>;

    /// Fetches the newest stable release in a single request
    async fn latest_release(&self) -> Result<String, SourceError>;
}
