use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{CACHE_FILE_NAME, Config};
use crate::version::error::CacheError;

/// On-disk snapshot of known releases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CacheEntry {
    fetched_at: DateTime<Utc>,
    /// Stable releases, newest-first
    versions: Vec<String>,
    /// All releases including prereleases, newest-first
    prerelease_versions: Vec<String>,
}

/// Version lists read back from the cache
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CachedVersions {
    pub stable: Vec<String>,
    pub prerelease: Vec<String>,
}

/// Release cache stored as `<dir>/releases.json`.
///
/// Each process owns its own handle. Writes go through a temp file in the
/// same directory and a rename, so concurrent readers always see a complete
/// file. Concurrent writers are not serialized; the last rename wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseCache {
    /// `None` means memory-only: every load misses and saves are no-ops
    dir: Option<PathBuf>,
    /// `None` means entries never expire; zero or negative means they always do
    ttl: Option<TimeDelta>,
}

impl ReleaseCache {
    pub fn new(dir: Option<PathBuf>, ttl: TimeDelta) -> Self {
        Self {
            dir,
            ttl: Some(ttl),
        }
    }

    pub fn memory_only() -> Self {
        Self {
            dir: None,
            ttl: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_dir(), config.cache_ttl)
    }

    /// A handle on the same file that ignores entry age.
    pub fn stale_reader(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            ttl: None,
        }
    }

    pub fn ttl(&self) -> Option<TimeDelta> {
        self.ttl
    }

    /// Full path of the cache file, `None` in memory-only mode.
    pub fn path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(CACHE_FILE_NAME))
    }

    /// Read the cached lists if the file exists, parses, and is within TTL.
    ///
    /// A missing, corrupt, or expired file are all the same miss.
    pub fn load(&self) -> Option<CachedVersions> {
        self.load_at(Utc::now())
    }

    fn load_at(&self, now: DateTime<Utc>) -> Option<CachedVersions> {
        let path = self.path()?;

        let data = std::fs::read(&path)
            .inspect_err(|e| debug!("Release cache miss for {:?}: {}", path, e))
            .ok()?;

        let entry: CacheEntry = serde_json::from_slice(&data)
            .inspect_err(|e| debug!("Release cache at {:?} is corrupt: {}", path, e))
            .ok()?;

        if self.is_expired(entry.fetched_at, now) {
            debug!(
                "Release cache at {:?} is stale (fetched at {})",
                path, entry.fetched_at
            );
            return None;
        }

        Some(CachedVersions {
            stable: entry.versions,
            prerelease: entry.prerelease_versions,
        })
    }

    fn is_expired(&self, fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A timestamp in the future gives a negative age
        self.ttl.is_some_and(|ttl| now.signed_duration_since(fetched_at) > ttl)
    }

    /// Replace the cache file with the given lists, stamped with the current time.
    pub fn save(&self, stable: &[String], prerelease: &[String]) -> Result<(), CacheError> {
        let (Some(dir), Some(path)) = (self.dir.as_deref(), self.path()) else {
            return Ok(());
        };

        std::fs::create_dir_all(dir).map_err(|source| CacheError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let entry = CacheEntry {
            fetched_at: Utc::now(),
            versions: stable.to_vec(),
            prerelease_versions: prerelease.to_vec(),
        };
        let data = serde_json::to_vec_pretty(&entry)?;

        // Dropping the temp file on any early return removes it
        let mut tmp = tempfile::Builder::new()
            .prefix(".releases-")
            .suffix(".json.tmp")
            .tempfile_in(dir)
            .map_err(CacheError::TempFile)?;
        tmp.write_all(&data).map_err(CacheError::Write)?;
        tmp.as_file().sync_all().map_err(CacheError::Write)?;
        tmp.persist(&path).map_err(|e| CacheError::Persist(e.error))?;

        info!(
            "Saved {} stable and {} total versions to {:?}",
            stable.len(),
            prerelease.len(),
            path
        );
        Ok(())
    }
}
