//! Combining known version lists with freshly fetched deltas

use std::collections::HashSet;

use crate::version::baseline::{baseline_prerelease_versions, baseline_versions};
use crate::version::semver::sort_descending;

/// Merge `delta` into the matching baseline list.
///
/// `include_prerelease` picks the baseline variant; the delta is taken as-is.
pub fn merge_with_baseline(delta: &[String], include_prerelease: bool) -> Vec<String> {
    let base = if include_prerelease {
        baseline_prerelease_versions()
    } else {
        baseline_versions()
    };
    merge_and_sort(&base, delta)
}

/// Merge `delta` into a previously cached list.
pub fn merge_with_cached(cached: &[String], delta: &[String]) -> Vec<String> {
    merge_and_sort(cached, delta)
}

/// Union of both lists, deduplicated by exact string, newest-first.
///
/// "v0.22.0" and "0.22.0" are distinct entries here.
fn merge_and_sort(a: &[String], b: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    let merged: Vec<&str> = a
        .iter()
        .chain(b)
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect();

    sort_descending(&merged)
}

/// Head of a newest-first list, or an empty string.
pub fn newest_version(versions: &[String]) -> String {
    versions.first().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn merge_with_cached_deduplicates_and_sorts() {
        let merged = merge_with_cached(
            &strings(&["0.22.0", "0.21.0"]),
            &strings(&["0.23.0", "0.22.0"]),
        );

        assert_eq!(merged, vec!["0.23.0", "0.22.0", "0.21.0"]);
    }

    #[test]
    fn merge_with_cached_keeps_differently_formatted_equal_versions() {
        let merged = merge_with_cached(&strings(&["0.22.0"]), &strings(&["v0.22.0"]));

        assert_eq!(merged.len(), 2);
        assert!(merged.contains(&"0.22.0".to_string()));
        assert!(merged.contains(&"v0.22.0".to_string()));
    }

    #[test]
    fn merge_with_cached_of_empty_delta_returns_cached() {
        let cached = strings(&["0.22.0", "0.21.0"]);

        assert_eq!(merge_with_cached(&cached, &[]), cached);
    }

    #[test]
    fn merge_with_baseline_without_delta_returns_baseline() {
        assert_eq!(
            merge_with_baseline(&[], false),
            sort_descending(&baseline_versions())
        );
        assert_eq!(
            merge_with_baseline(&[], true),
            sort_descending(&baseline_prerelease_versions())
        );
    }

    #[test]
    fn merge_with_baseline_puts_new_release_on_top() {
        let merged = merge_with_baseline(&strings(&["0.23.0"]), false);

        assert_eq!(&merged[..2], &["0.23.0", "0.22.0"]);
        assert_eq!(merged.len(), baseline_versions().len() + 1);
    }

    #[test]
    fn merge_with_baseline_uses_prerelease_variant_when_requested() {
        let merged = merge_with_baseline(&strings(&["0.23.0-alpha.0"]), true);

        assert_eq!(&merged[..3], &["0.23.0-alpha.0", "0.22.0", "0.22.0-beta.0"]);
    }

    #[test]
    fn newest_version_returns_head_or_empty() {
        assert_eq!(newest_version(&[]), "");
        assert_eq!(newest_version(&strings(&["0.22.0", "0.21.0"])), "0.22.0");
    }
}
