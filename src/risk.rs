//! Risk evaluator - folds strength and breach findings into one verdict.

use crate::config::StrengthConfig;
use crate::report::{BreachResult, RiskTier, StrengthReport};

/// Pure function of a [`StrengthReport`] and a [`BreachResult`]: produces
/// the risk tier plus an ordered recommendation list.
pub struct RiskEvaluator {
    config: StrengthConfig,
}

impl RiskEvaluator {
    pub fn new(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Tie-break order: unknown breach status wins over everything, then
    /// breached+weak, breached, weak, secure.
    pub fn evaluate(
        &self,
        strength: &StrengthReport,
        breach: &BreachResult,
    ) -> (RiskTier, Vec<String>) {
        let weak = strength.score < self.config.min_score;

        let tier = match breach.match_count {
            None if breach.error.is_some() => RiskTier::Indeterminate,
            _ => {
                let breached = breach.match_count.unwrap_or(0) > 0;
                match (breached, weak) {
                    (true, true) => RiskTier::WeakAndBreached,
                    (true, false) => RiskTier::Breached,
                    (false, true) => RiskTier::Weak,
                    (false, false) => RiskTier::Secure,
                }
            }
        };

        (tier, self.recommendations(strength, breach, tier))
    }

    /// Builds the guidance list, most actionable first: general
    /// length/variety advice when the score is below threshold, then the
    /// specific failing requirements, pattern advice, breach guidance and
    /// the indeterminate caveat.
    fn recommendations(
        &self,
        strength: &StrengthReport,
        breach: &BreachResult,
        tier: RiskTier,
    ) -> Vec<String> {
        let mut out = Vec::new();
        let requirements = &strength.requirements;

        if strength.score < self.config.min_score {
            out.push("Choose a longer or more varied password.".to_string());
        }
        if !requirements.length {
            out.push(format!(
                "Use a longer password: at least {} characters.",
                self.config.min_length
            ));
        }
        if self.config.require_lowercase && !requirements.lowercase {
            out.push("Add lowercase letters.".to_string());
        }
        if self.config.require_uppercase && !requirements.uppercase {
            out.push("Add uppercase letters.".to_string());
        }
        if self.config.require_numbers && !requirements.number {
            out.push("Add numbers.".to_string());
        }
        if self.config.require_symbols && !requirements.symbol {
            out.push("Add symbols such as !, @ or #.".to_string());
        }
        if strength.pattern_penalty > 0 {
            out.push(
                "Avoid repeated or sequential characters and common words.".to_string(),
            );
        }

        match tier {
            RiskTier::Breached | RiskTier::WeakAndBreached => {
                let count = breach.match_count.unwrap_or(0);
                out.push(format!(
                    "This password has appeared in {count} known data breaches. Choose a different one."
                ));
            }
            RiskTier::Indeterminate => {
                out.push(
                    "The breach check could not be completed. Treat this password as \
                     unverified rather than safe."
                        .to_string(),
                );
            }
            RiskTier::Secure | RiskTier::Weak => {}
        }

        out
    }
}
