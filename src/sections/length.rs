//! Length section - cumulative threshold bonuses and the minimum-length flag.

use secrecy::{ExposeSecret, SecretString};

use crate::config::StrengthConfig;

pub(crate) struct LengthFindings {
    pub points: u32,
    pub meets_minimum: bool,
}

/// Awards the bonus of every satisfied `(length, bonus)` threshold.
///
/// Thresholds are cumulative, so a longer password can never earn fewer
/// length points than a shorter one.
pub(crate) fn length_section(secret: &SecretString, config: &StrengthConfig) -> LengthFindings {
    let len = secret.expose_secret().chars().count();
    let points = config
        .length_thresholds
        .iter()
        .filter(|(threshold, _)| len >= *threshold)
        .map(|(_, bonus)| u32::from(*bonus))
        .sum();
    LengthFindings {
        points,
        meets_minimum: len >= config.min_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(pwd: &str) -> LengthFindings {
        let secret = SecretString::new(pwd.to_string().into());
        length_section(&secret, &StrengthConfig::default())
    }

    #[test]
    fn test_length_section_below_all_thresholds() {
        let result = findings("short");
        assert_eq!(result.points, 0);
        assert!(!result.meets_minimum);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = findings("12ab56cd");
        assert_eq!(result.points, 20);
        assert!(result.meets_minimum);
    }

    #[test]
    fn test_length_section_thresholds_are_cumulative() {
        assert_eq!(findings("tolfmbakqenr").points, 30); // 12 chars
        assert_eq!(findings("tolfmbakqenrwpgu").points, 40); // 16 chars
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 8 multibyte characters must satisfy the 8-char minimum.
        let result = findings("ßßßßßßßß");
        assert!(result.meets_minimum);
        assert_eq!(result.points, 20);
    }

    #[test]
    fn test_length_section_monotonic() {
        let mut previous = 0;
        let mut pwd = String::new();
        for c in "kmxwbtrpqzngvhdf".chars() {
            pwd.push(c);
            let points = findings(&pwd).points;
            assert!(points >= previous, "length points regressed at {:?}", pwd);
            previous = points;
        }
    }
}
