//! Result types produced by the assessment pipeline.

use serde::Serialize;

use crate::error::ErrorKind;

/// Per-class character counts of a candidate secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub upper: u32,
    pub lower: u32,
    pub digit: u32,
    pub symbol: u32,
}

/// Pass/fail checklist for the individual password requirements.
///
/// Each flag is computed from the same predicates used for scoring, so the
/// checklist and the score never disagree about which classes are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub symbol: bool,
}

impl Requirements {
    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number && self.symbol
    }
}

/// Outcome of local strength analysis. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Composite strength score, clamped to 0..=100.
    pub score: u8,
    pub requirements: Requirements,
    /// Rough guessing-entropy estimate from length and character pool size.
    pub entropy_bits: f64,
    pub unique_char_count: usize,
    pub class_counts: ClassCounts,
    /// Total points subtracted for repeated runs, sequences and common words.
    pub pattern_penalty: u32,
}

/// Outcome of the breach lookup path.
///
/// `match_count` is `None` whenever the lookup did not produce a definitive
/// answer; in that case `error` says why. A confirmed-clean result is
/// `Some(0)`, which is deliberately distinguishable from "unknown".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreachResult {
    pub match_count: Option<u64>,
    pub response_time_ms: u64,
    pub served_from_cache: bool,
    pub error: Option<ErrorKind>,
}

impl BreachResult {
    pub(crate) fn found(match_count: u64, response_time_ms: u64, served_from_cache: bool) -> Self {
        Self {
            match_count: Some(match_count),
            response_time_ms,
            served_from_cache,
            error: None,
        }
    }

    pub(crate) fn failed(error: ErrorKind, response_time_ms: u64) -> Self {
        Self {
            match_count: None,
            response_time_ms,
            served_from_cache: false,
            error: Some(error),
        }
    }
}

/// Coarse classification of a security assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    Secure,
    Weak,
    Breached,
    WeakAndBreached,
    /// Breach status could not be confirmed; callers must not treat this
    /// as `Secure`.
    Indeterminate,
}

/// Unified result of a single `assess` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityAssessment {
    pub strength: StrengthReport,
    pub breach: BreachResult,
    pub risk_tier: RiskTier,
    /// Human-readable guidance, most actionable first. Empty when there is
    /// nothing to improve.
    pub recommendations: Vec<String>,
}
