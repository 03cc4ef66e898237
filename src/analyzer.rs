//! Strength analyzer - deterministic local scoring of a candidate secret.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::config::StrengthConfig;
use crate::report::{ClassCounts, Requirements, StrengthReport};
use crate::sections::{length_section, pattern_section, variety_section};

/// Scores a candidate secret without any network access.
///
/// Analysis is a pure function of the input and the configuration: the same
/// secret always yields an identical [`StrengthReport`].
pub struct StrengthAnalyzer {
    config: StrengthConfig,
}

impl StrengthAnalyzer {
    pub fn new(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Produces a [`StrengthReport`] for the secret.
    ///
    /// Score = length bonuses + class-presence bonuses + uniqueness bonus
    /// - pattern penalties, clamped to 0..=100. The empty string scores 0
    /// with every requirement false.
    pub fn analyze(&self, secret: &SecretString) -> StrengthReport {
        let length = length_section(secret, &self.config);
        let variety = variety_section(secret);
        let pattern = pattern_section(secret);

        let pwd = secret.expose_secret();
        let unique: HashSet<char> = pwd.chars().collect();
        let unique_char_count = unique.len();
        let uniqueness_bonus = if unique_char_count >= 16 {
            10
        } else if unique_char_count >= 12 {
            5
        } else {
            0
        };

        let entropy_bits = estimate_entropy_bits(pwd.chars().count(), &variety.counts);

        let total = length.points + variety.points + uniqueness_bonus;
        let score = total.saturating_sub(pattern.penalty).min(100) as u8;

        let requirements = Requirements {
            length: length.meets_minimum,
            uppercase: variety.counts.upper > 0,
            lowercase: variety.counts.lower > 0,
            number: variety.counts.digit > 0,
            symbol: variety.counts.symbol > 0,
        };

        StrengthReport {
            score,
            requirements,
            entropy_bits,
            unique_char_count,
            class_counts: variety.counts,
            pattern_penalty: pattern.penalty,
        }
    }
}

/// `length * log2(pool)` where the pool is the union of the alphabets of the
/// character classes actually present.
fn estimate_entropy_bits(len: usize, counts: &ClassCounts) -> f64 {
    let mut pool = 0usize;
    if counts.lower > 0 {
        pool += 26;
    }
    if counts.upper > 0 {
        pool += 26;
    }
    if counts.digit > 0 {
        pool += 10;
    }
    if counts.symbol > 0 {
        pool += 33;
    }
    if pool == 0 {
        return 0.0;
    }
    len as f64 * (pool as f64).log2()
}
