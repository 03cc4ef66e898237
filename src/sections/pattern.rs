//! Pattern section - penalizes repeated runs, sequences and common words.

use secrecy::{ExposeSecret, SecretString};

const REPEAT_RUN_PENALTY: u32 = 10;
const SEQUENTIAL_RUN_PENALTY: u32 = 10;
const KEYBOARD_PATTERN_PENALTY: u32 = 10;
const COMMON_PASSWORD_PENALTY: u32 = 15;

/// Minimum identical consecutive characters counted as a repeat run.
const REPEAT_RUN_LEN: usize = 3;
/// Minimum strictly ascending/descending consecutive characters counted as
/// a sequential run.
const SEQUENTIAL_RUN_LEN: usize = 4;

const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "qwertz", "azerty", "asdf", "asdfgh", "zxcvbn", "1q2w3e", "qazwsx",
];

/// Substrings from the most common leaked passwords. Kept as a const table
/// so the analysis stays a pure function of its input.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "abc123", "letmein", "welcome", "admin",
    "iloveyou", "monkey", "dragon", "football", "sunshine", "princess", "trustno1",
    "master", "shadow",
];

pub(crate) struct PatternFindings {
    pub penalty: u32,
}

/// Scans the secret for predictable structure.
///
/// Matching is case-insensitive; every repeated or sequential run adds its
/// penalty, keyboard walks and common-password substrings add a flat
/// penalty each at most once.
pub(crate) fn pattern_section(secret: &SecretString) -> PatternFindings {
    let lowered = secret.expose_secret().to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();

    let mut penalty = 0;
    penalty += REPEAT_RUN_PENALTY * count_repeat_runs(&chars);
    penalty += SEQUENTIAL_RUN_PENALTY * count_sequential_runs(&chars);

    if KEYBOARD_PATTERNS.iter().any(|p| lowered.contains(p)) {
        penalty += KEYBOARD_PATTERN_PENALTY;
    }
    if COMMON_PASSWORDS.iter().any(|p| lowered.contains(p)) {
        penalty += COMMON_PASSWORD_PENALTY;
    }

    PatternFindings { penalty }
}

/// Number of maximal runs of identical consecutive characters with length
/// >= [`REPEAT_RUN_LEN`].
fn count_repeat_runs(chars: &[char]) -> u32 {
    let mut runs = 0;
    let mut run_len = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run_len += 1;
        } else {
            if run_len >= REPEAT_RUN_LEN {
                runs += 1;
            }
            run_len = 1;
        }
    }
    if run_len >= REPEAT_RUN_LEN && !chars.is_empty() {
        runs += 1;
    }
    runs
}

/// Number of maximal runs of strictly ascending or descending consecutive
/// characters (by code point) with length >= [`SEQUENTIAL_RUN_LEN`].
fn count_sequential_runs(chars: &[char]) -> u32 {
    if chars.len() < SEQUENTIAL_RUN_LEN {
        return 0;
    }
    let mut runs = 0;
    let mut run_len = 1usize;
    let mut direction = 0i32;
    for i in 1..chars.len() {
        let step = chars[i] as i32 - chars[i - 1] as i32;
        if step == direction && (step == 1 || step == -1) {
            run_len += 1;
        } else {
            if run_len >= SEQUENTIAL_RUN_LEN {
                runs += 1;
            }
            if step == 1 || step == -1 {
                direction = step;
                run_len = 2;
            } else {
                direction = 0;
                run_len = 1;
            }
        }
    }
    if run_len >= SEQUENTIAL_RUN_LEN {
        runs += 1;
    }
    runs
}
