use std::cmp::Ordering;

/// A release tag parsed into its numeric core and prerelease suffix.
///
/// Parsing never fails: anything that is not `[v]X.Y.Z[-pre]` becomes the
/// zero version with `original` still holding the input, so malformed tags
/// keep participating in sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Empty for a release
    pub prerelease: String,
    /// The input exactly as given to [`Version::parse`]
    pub original: String,
}

impl Version {
    /// Parse a version string, with or without a leading `v`.
    ///
    /// Examples:
    /// - "0.22.0" -> (0, 22, 0, "")
    /// - "v0.21.0-beta.0" -> (0, 21, 0, "beta.0")
    /// - "0.22" -> (0, 0, 0, "") with original "0.22"
    pub fn parse(input: &str) -> Self {
        let stripped = input.strip_prefix('v').unwrap_or(input);
        let (core, prerelease) = stripped.split_once('-').unwrap_or((stripped, ""));

        let Some((major, minor, patch)) = parse_core(core) else {
            return Self {
                original: input.to_string(),
                ..Self::default()
            };
        };

        Self {
            major,
            minor,
            patch,
            prerelease: prerelease.to_string(),
            original: input.to_string(),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Precedence between two versions.
    ///
    /// A release outranks every prerelease of the same core. Two prereleases
    /// compare by plain string order of their suffix, so `rc.10` sorts before
    /// `rc.2`.
    pub fn precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
    }
}

fn parse_core(core: &str) -> Option<(u64, u64, u64)> {
    let mut parts = core.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

/// Returns true when `a` has strictly lower precedence than `b`.
pub fn less(a: &Version, b: &Version) -> bool {
    a.precedence(b) == Ordering::Less
}

/// Sort version strings newest-first.
///
/// The sort is stable: entries of equal precedence (including every
/// unparsable string, which all collapse to 0.0.0) keep their input order.
pub fn sort_descending<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let mut parsed: Vec<Version> = versions
        .iter()
        .map(|v| Version::parse(v.as_ref()))
        .collect();

    parsed.sort_by(|a, b| b.precedence(a));

    parsed.into_iter().map(|v| v.original).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.22.0", 0, 22, 0, "")]
    #[case("v0.22.0", 0, 22, 0, "")]
    #[case("1.2.3-alpha", 1, 2, 3, "alpha")]
    #[case("v0.21.0-beta.0", 0, 21, 0, "beta.0")]
    #[case("0.20.0-rc-1", 0, 20, 0, "rc-1")] // only the first '-' splits
    fn parse_extracts_components(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
        #[case] prerelease: &str,
    ) {
        let version = Version::parse(input);

        assert_eq!(
            version,
            Version {
                major,
                minor,
                patch,
                prerelease: prerelease.to_string(),
                original: input.to_string(),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("latest")]
    #[case("0.22")]
    #[case("1.2.3.4")]
    #[case("1.x.3")]
    #[case("vv1.2.3")]
    #[case("1.2.-3")]
    fn parse_returns_zero_sentinel_for_malformed_input(#[case] input: &str) {
        let version = Version::parse(input);

        assert_eq!(
            version,
            Version {
                original: input.to_string(),
                ..Version::default()
            }
        );
    }

    #[rstest]
    #[case("0.21.0", "0.22.0", true)]
    #[case("0.22.0", "0.21.0", false)]
    #[case("0.9.1", "0.10.0", true)] // numeric, not lexicographic
    #[case("1.0.0", "0.99.99", false)]
    #[case("0.22.0", "0.22.1", true)]
    #[case("0.22.0-beta.0", "0.22.0", true)]
    #[case("0.22.0", "0.22.0-beta.0", false)]
    #[case("0.22.0-alpha.0", "0.22.0-beta.0", true)]
    #[case("0.22.0-rc.10", "0.22.0-rc.2", true)] // plain string order
    #[case("0.22.0", "0.22.0", false)]
    #[case("v0.22.0", "0.22.0", false)]
    fn less_orders_versions(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(less(&Version::parse(a), &Version::parse(b)), expected);
    }

    #[test]
    fn less_is_irreflexive_and_transitive() {
        let versions: Vec<Version> = [
            "0.20.0-beta.0",
            "0.20.0",
            "0.21.0-alpha.0",
            "0.21.0-beta.0",
            "0.21.0",
            "0.21.3",
            "garbage",
        ]
        .iter()
        .map(|v| Version::parse(v))
        .collect();

        for a in &versions {
            assert!(!less(a, a), "{} < itself", a.original);
            for b in &versions {
                for c in &versions {
                    if less(a, b) && less(b, c) {
                        assert!(less(a, c), "{} {} {}", a.original, b.original, c.original);
                    }
                }
            }
        }
    }

    #[test]
    fn sort_descending_orders_newest_first() {
        let sorted = sort_descending(&[
            "0.19.0",
            "0.22.0-beta.0",
            "0.21.3",
            "0.22.0",
            "0.22.0-alpha.0",
            "0.4.0",
        ]);

        assert_eq!(
            sorted,
            vec![
                "0.22.0",
                "0.22.0-beta.0",
                "0.22.0-alpha.0",
                "0.21.3",
                "0.19.0",
                "0.4.0"
            ]
        );
    }

    #[test]
    fn sort_descending_keeps_unparsable_entries_in_input_order_at_the_end() {
        let sorted = sort_descending(&["nightly", "0.1.0", "latest", "0.2.0", "edge"]);

        assert_eq!(sorted, vec!["0.2.0", "0.1.0", "nightly", "latest", "edge"]);
    }

    #[test]
    fn sort_descending_is_idempotent() {
        let once = sort_descending(&["0.2.0", "v0.3.0", "junk", "0.3.0-rc.1", "0.1.0"]);
        let twice = sort_descending(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn sort_descending_of_empty_input_is_empty() {
        let empty: [&str; 0] = [];
        assert!(sort_descending(&empty).is_empty());
    }
}
