use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::TimeDelta;
use regex::Regex;

// =============================================================================
// Constants
// =============================================================================

/// Default age after which the release cache is refreshed (1 hour)
pub const DEFAULT_CACHE_TTL: TimeDelta = TimeDelta::hours(1);

/// Timeout for a single HTTP request (30 seconds)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size requested from the release listing endpoint
pub const RELEASES_PER_PAGE: u32 = 100;

/// Repository whose releases are tracked
pub const DEFAULT_RELEASE_REPO: &str = "loft-sh/vcluster";

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Name of the release cache file inside the cache directory
pub const CACHE_FILE_NAME: &str = "releases.json";

/// Environment variable naming the vc-env root directory
pub const ROOT_ENV: &str = "VCENV_ROOT";

/// Environment variable overriding the cache TTL (Go duration syntax)
pub const CACHE_TTL_ENV: &str = "VCENV_CACHE_TTL";

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "VCENV_LOG";

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// vc-env root directory; `None` disables on-disk caching
    pub root: Option<PathBuf>,
    /// Maximum cache age; zero or negative makes every cached entry stale
    pub cache_ttl: TimeDelta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(ROOT_ENV).ok(),
            std::env::var(CACHE_TTL_ENV).ok(),
        )
    }

    fn from_values(root: Option<String>, cache_ttl: Option<String>) -> Self {
        Self {
            root: root.filter(|r| !r.is_empty()).map(PathBuf::from),
            cache_ttl: cache_ttl
                .as_deref()
                .and_then(parse_go_duration)
                .unwrap_or(DEFAULT_CACHE_TTL),
        }
    }

    /// Directory holding the release cache, `None` when running memory-only.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join("cache"))
    }
}

static DURATION_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|μs|ms|s|m|h)").expect("valid duration regex")
});

/// Parse a Go-style duration such as "30m", "1h30m", "1.5h" or "500ms".
///
/// A leading sign is allowed, so "-5m" is a negative duration. Returns
/// `None` for empty or malformed input. A bare "0" is accepted as zero.
pub fn parse_go_duration(input: &str) -> Option<TimeDelta> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if input.is_empty() {
        return None;
    }
    if input == "0" {
        return Some(TimeDelta::zero());
    }

    let mut consumed = 0;
    let mut total_nanos = 0.0_f64;
    for caps in DURATION_TERM.captures_iter(input) {
        let whole = caps.get(0)?;
        if whole.start() != consumed {
            return None;
        }
        consumed = whole.end();

        let value: f64 = caps[1].parse().ok()?;
        let unit_nanos = match &caps[2] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        total_nanos += value * unit_nanos;
    }

    if consumed == 0 || consumed != input.len() {
        return None;
    }
    let total_nanos = total_nanos.round();
    if !total_nanos.is_finite() || total_nanos > i64::MAX as f64 {
        return None;
    }
    let magnitude = TimeDelta::nanoseconds(total_nanos as i64);
    Some(if negative { -magnitude } else { magnitude })
}
