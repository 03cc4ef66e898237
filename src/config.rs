//! Configuration surface for the assessment pipeline.
//!
//! Everything here is plain data handed to the constructors; there is no
//! ambient global configuration.

use std::time::Duration;

/// Default k-anonymity range endpoint (HaveIBeenPwned convention).
pub const DEFAULT_API_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default hard bound on a single range fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default freshness window for cached range responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Default cache capacity, in prefix entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Scores below this are considered weak.
pub const DEFAULT_MIN_SCORE: u8 = 60;

/// Minimum acceptable password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Settings for the remote breach lookup and its cache.
#[derive(Debug, Clone)]
pub struct BreachConfig {
    /// Base URL of the range endpoint; the 5-char hash prefix is appended.
    pub api_base_url: String,
    /// Hard bound on a single provider fetch.
    pub timeout: Duration,
    /// How long a cached range response stays fresh.
    pub cache_ttl: Duration,
    /// Maximum number of prefix entries kept before LRU eviction.
    pub cache_capacity: usize,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Settings for local strength analysis and the weak/secure cutoff.
#[derive(Debug, Clone)]
pub struct StrengthConfig {
    /// Scores below this are considered weak.
    pub min_score: u8,
    /// Minimum length for the `length` requirement flag.
    pub min_length: usize,
    /// Cumulative `(length, bonus)` pairs, sorted ascending by length.
    /// Each satisfied threshold adds its bonus, so longer input never
    /// scores lower than shorter input.
    pub length_thresholds: Vec<(usize, u8)>,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_symbols: bool,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            min_length: DEFAULT_MIN_LENGTH,
            length_thresholds: vec![(8, 20), (12, 10), (16, 10)],
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: true,
        }
    }
}

/// Top-level configuration consumed by the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    pub breach: BreachConfig,
    pub strength: StrengthConfig,
}
