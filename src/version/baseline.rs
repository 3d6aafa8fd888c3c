//! Release lists compiled into the binary
//!
//! Gives the very first invocation (and any invocation without network) a
//! useful answer. Delta fetches pick up anything newer than the head of
//! these lists, so they only need to be a reasonable lower bound. Add new
//! releases at the top when cutting a vc-env release.

/// Known stable releases, newest-first.
const BASELINE_VERSIONS: &[&str] = &[
    "0.22.0", //
    "0.21.3", "0.21.2", "0.21.1", "0.21.0", //
    "0.20.0", //
    "0.19.7", "0.19.6", "0.19.5", "0.19.4", "0.19.3", "0.19.2", "0.19.1", "0.19.0", //
    "0.18.1", "0.18.0", //
    "0.17.1", "0.17.0", //
    "0.16.0", //
    "0.15.7", "0.15.6", "0.15.5", "0.15.4", "0.15.3", "0.15.2", "0.15.1", "0.15.0", //
    "0.14.2", "0.14.1", "0.14.0", //
    "0.13.0", //
    "0.12.2", "0.12.1", "0.12.0", //
    "0.11.4", "0.11.3", "0.11.2", "0.11.1", "0.11.0", //
    "0.10.5", "0.10.4", "0.10.3", "0.10.2", "0.10.1", "0.10.0", //
    "0.9.1", "0.9.0", //
    "0.8.0", //
    "0.7.0", //
    "0.6.0", //
    "0.5.0", //
    "0.4.0",
];

/// Known releases including prereleases, newest-first.
const BASELINE_PRERELEASE_VERSIONS: &[&str] = &[
    "0.22.0", "0.22.0-beta.0", "0.22.0-alpha.0", //
    "0.21.3", "0.21.2", "0.21.1", "0.21.0", "0.21.0-beta.0", "0.21.0-alpha.0", //
    "0.20.0", "0.20.0-beta.0", //
    "0.19.7", "0.19.6", "0.19.5", "0.19.4", "0.19.3", "0.19.2", "0.19.1", "0.19.0", //
    "0.18.1", "0.18.0", //
    "0.17.1", "0.17.0", //
    "0.16.0", //
    "0.15.7", "0.15.6", "0.15.5", "0.15.4", "0.15.3", "0.15.2", "0.15.1", "0.15.0", //
    "0.14.2", "0.14.1", "0.14.0", //
    "0.13.0", //
    "0.12.2", "0.12.1", "0.12.0", //
    "0.11.4", "0.11.3", "0.11.2", "0.11.1", "0.11.0", //
    "0.10.5", "0.10.4", "0.10.3", "0.10.2", "0.10.1", "0.10.0", //
    "0.9.1", "0.9.0", //
    "0.8.0", //
    "0.7.0", //
    "0.6.0", //
    "0.5.0", //
    "0.4.0",
];

pub fn baseline_versions() -> Vec<String> {
    BASELINE_VERSIONS.iter().map(|v| v.to_string()).collect()
}

pub fn baseline_prerelease_versions() -> Vec<String> {
    BASELINE_PRERELEASE_VERSIONS
        .iter()
        .map(|v| v.to_string())
        .collect()
}

/// Newest stable baseline release, or an empty string for an empty baseline.
///
/// Default delta-fetch anchor when no cache exists at all.
pub fn baseline_newest() -> String {
    BASELINE_VERSIONS
        .first()
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Newest entry of the prerelease baseline, the prerelease stream's anchor.
pub fn baseline_prerelease_newest() -> String {
    BASELINE_PRERELEASE_VERSIONS
        .first()
        .map(|v| v.to_string())
        .unwrap_or_default()
}
