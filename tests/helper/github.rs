//! GitHub mock server and cache fixtures

use std::path::Path;

use chrono::{DateTime, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

use vc_env::config::CACHE_FILE_NAME;

pub const RELEASES_PATH: &str = "/repos/loft-sh/vcluster/releases";

/// Build a release listing body from `(tag, prerelease)` pairs, newest first
pub fn release_page_body(releases: &[(&str, bool)]) -> String {
    let releases: Vec<_> = releases
        .iter()
        .map(|(tag, prerelease)| {
            json!({
                "tag_name": tag,
                "prerelease": prerelease,
                "draft": false,
            })
        })
        .collect();
    serde_json::Value::Array(releases).to_string()
}

/// Register the first (and only) page of the release listing
pub async fn mock_release_page(server: &mut ServerGuard, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", RELEASES_PATH)
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Write a cache file with an explicit fetch time
pub fn write_cache_entry(dir: &Path, fetched_at: DateTime<Utc>, stable: &[&str], pre: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    let body = json!({
        "fetched_at": fetched_at,
        "versions": stable,
        "prerelease_versions": pre,
    });
    std::fs::write(dir.join(CACHE_FILE_NAME), body.to_string()).unwrap();
}
