//! Three-tier lookup of known releases
//!
//! 1. A fresh disk cache answers without touching the network.
//! 2. Otherwise the cache is read ignoring its TTL to get a merge base, and
//!    only releases newer than its head (or the baseline head) are fetched.
//!    The delta is merged in and written back.
//! 3. If fetching fails, the stale cache or the compiled-in baseline is
//!    returned instead and a warning is logged.

use tracing::{debug, info, warn};

use crate::version::baseline::{
    baseline_newest, baseline_prerelease_newest, baseline_prerelease_versions, baseline_versions,
};
use crate::version::cache::{CachedVersions, ReleaseCache};
use crate::version::merge::{merge_with_baseline, merge_with_cached, newest_version};
use crate::version::source::ReleaseSource;

/// How a lookup was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Served from a cache entry within its TTL
    FreshHit,
    /// Fetched a delta, merged it, and wrote the result back
    DeltaMergeSuccess,
    /// Fetching failed; served the stale cache
    DeltaMergeNetworkFallback,
    /// Fetching failed and no cache existed; served the baseline
    NoCacheBaselineFallback,
}

/// Known releases, both lists newest-first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVersions {
    pub stable: Vec<String>,
    /// Stable releases and prereleases
    pub prerelease: Vec<String>,
    pub outcome: FetchOutcome,
}

impl RemoteVersions {
    fn new(versions: CachedVersions, outcome: FetchOutcome) -> Self {
        Self {
            stable: versions.stable,
            prerelease: versions.prerelease,
            outcome,
        }
    }

    pub fn select(&self, include_prerelease: bool) -> &[String] {
        if include_prerelease {
            &self.prerelease
        } else {
            &self.stable
        }
    }

    pub fn into_selected(self, include_prerelease: bool) -> Vec<String> {
        if include_prerelease {
            self.prerelease
        } else {
            self.stable
        }
    }
}

/// Resolve the known release lists, fetching as little as possible.
///
/// Never fails: without network the stale cache or baseline is returned.
pub async fn fetch_remote_versions(
    source: &dyn ReleaseSource,
    cache: &ReleaseCache,
) -> RemoteVersions {
    if let Some(fresh) = cache.load() {
        debug!("Serving releases from fresh cache");
        return RemoteVersions::new(fresh, FetchOutcome::FreshHit);
    }

    let stale = cache.stale_reader().load();

    let (stable_anchor, prerelease_anchor) = match &stale {
        Some(stale) => (
            newest_version(&stale.stable),
            newest_version(&stale.prerelease),
        ),
        None => (baseline_newest(), baseline_prerelease_newest()),
    };
    debug!(
        "Fetching releases newer than {:?} (stable) and {:?} (prerelease)",
        stable_anchor, prerelease_anchor
    );

    let (delta_stable, delta_prerelease) = futures::join!(
        source.list_releases_since(&stable_anchor, false),
        source.list_releases_since(&prerelease_anchor, true),
    );

    let (delta_stable, delta_prerelease) = match (delta_stable, delta_prerelease) {
        (Ok(stable), Ok(prerelease)) => (stable, prerelease),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Failed to fetch remote versions; showing cached/baseline data: {}", e);
            return match stale {
                Some(stale) => RemoteVersions::new(stale, FetchOutcome::DeltaMergeNetworkFallback),
                None => RemoteVersions {
                    stable: baseline_versions(),
                    prerelease: baseline_prerelease_versions(),
                    outcome: FetchOutcome::NoCacheBaselineFallback,
                },
            };
        }
    };

    info!(
        "Fetched {} new stable and {} new prerelease-inclusive releases",
        delta_stable.len(),
        delta_prerelease.len()
    );

    let merged = match &stale {
        Some(stale) => CachedVersions {
            stable: merge_with_cached(&stale.stable, &delta_stable),
            prerelease: merge_with_cached(&stale.prerelease, &delta_prerelease),
        },
        None => CachedVersions {
            stable: merge_with_baseline(&delta_stable, false),
            prerelease: merge_with_baseline(&delta_prerelease, true),
        },
    };

    let _ = cache
        .save(&merged.stable, &merged.prerelease)
        .inspect_err(|e| warn!("Could not write version cache: {}", e));

    RemoteVersions::new(merged, FetchOutcome::DeltaMergeSuccess)
}

/// Known releases newest-first, with or without prereleases.
pub async fn list_remote_versions(
    source: &dyn ReleaseSource,
    cache: &ReleaseCache,
    include_prerelease: bool,
) -> Vec<String> {
    fetch_remote_versions(source, cache)
        .await
        .into_selected(include_prerelease)
}

/// Newest known release, `None` only if every list is empty.
pub async fn latest_remote_version(
    source: &dyn ReleaseSource,
    cache: &ReleaseCache,
    include_prerelease: bool,
) -> Option<String> {
    let versions = list_remote_versions(source, cache, include_prerelease).await;
    Some(newest_version(&versions)).filter(|v| !v.is_empty())
}
