//! Character variety section - counts classes and awards presence bonuses.

use secrecy::{ExposeSecret, SecretString};

use crate::report::ClassCounts;

pub(crate) struct VarietyFindings {
    pub counts: ClassCounts,
    pub points: u32,
}

/// Counts the character classes in the secret and awards +10 for lowercase,
/// uppercase and digit presence, +20 for symbol presence.
///
/// Symbols weigh more because attackers price them higher than a fourth
/// alphanumeric class.
pub(crate) fn variety_section(secret: &SecretString) -> VarietyFindings {
    let mut counts = ClassCounts::default();
    for c in secret.expose_secret().chars() {
        if c.is_uppercase() {
            counts.upper += 1;
        } else if c.is_lowercase() {
            counts.lower += 1;
        } else if c.is_ascii_digit() {
            counts.digit += 1;
        } else if !c.is_alphanumeric() {
            counts.symbol += 1;
        }
    }

    let mut points = 0;
    if counts.lower > 0 {
        points += 10;
    }
    if counts.upper > 0 {
        points += 10;
    }
    if counts.digit > 0 {
        points += 10;
    }
    if counts.symbol > 0 {
        points += 20;
    }

    VarietyFindings { counts, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(pwd: &str) -> VarietyFindings {
        let secret = SecretString::new(pwd.to_string().into());
        variety_section(&secret)
    }

    #[test]
    fn test_variety_section_all_classes() {
        let result = findings("Aa1!");
        assert_eq!(result.counts.upper, 1);
        assert_eq!(result.counts.lower, 1);
        assert_eq!(result.counts.digit, 1);
        assert_eq!(result.counts.symbol, 1);
        assert_eq!(result.points, 50);
    }

    #[test]
    fn test_variety_section_lowercase_only() {
        let result = findings("onlylower");
        assert_eq!(result.points, 10);
        assert_eq!(result.counts.upper, 0);
        assert_eq!(result.counts.symbol, 0);
    }

    #[test]
    fn test_variety_section_symbols_weigh_more() {
        assert_eq!(findings("!!!").points, 20);
        assert_eq!(findings("abc").points, 10);
    }

    #[test]
    fn test_variety_section_empty() {
        let result = findings("");
        assert_eq!(result.points, 0);
        assert_eq!(result.counts, ClassCounts::default());
    }

    #[test]
    fn test_variety_section_counts_every_occurrence() {
        let result = findings("AAbb12!!");
        assert_eq!(result.counts.upper, 2);
        assert_eq!(result.counts.lower, 2);
        assert_eq!(result.counts.digit, 2);
        assert_eq!(result.counts.symbol, 2);
    }
}
