//! Brute-force exposure estimation.
//!
//! A rough order-of-magnitude indicator, not a security guarantee: the
//! attacker rate and guess cap below are assumptions, kept as named
//! constants rather than derived figures.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{DIGIT_POOL, LOWER_POOL, SPECIAL_POOL, UPPER_POOL};
use crate::types::{ExposureBucket, PasswordAnalysis};

/// Assumed offline attacker rate, in guesses per second.
pub const ATTACKER_GUESS_RATE: f64 = 1e10;

/// Hard cap on the modeled guess count; keeps long inputs finite.
pub const GUESS_CAP: f64 = 1e18;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

/// Buckets the brute-force time-to-crack under the modeled attacker.
///
/// The search pool is the union of the character classes flagged in
/// `analysis`; an empty pool is treated as size 1.
pub fn estimate_exposure(password: &SecretString, analysis: &PasswordAnalysis) -> ExposureBucket {
    let mut pool = 0.0;
    if analysis.lowercase {
        pool += LOWER_POOL;
    }
    if analysis.uppercase {
        pool += UPPER_POOL;
    }
    if analysis.number {
        pool += DIGIT_POOL;
    }
    if analysis.special {
        pool += SPECIAL_POOL;
    }

    let length = password.expose_secret().chars().count() as f64;
    let entropy = length * pool.max(1.0).log2();
    let guesses = 2f64.powf(entropy).min(GUESS_CAP);
    let seconds = guesses / ATTACKER_GUESS_RATE;

    if seconds < MINUTE {
        ExposureBucket::Seconds
    } else if seconds < HOUR {
        ExposureBucket::Minutes
    } else if seconds < DAY {
        ExposureBucket::Hours
    } else if seconds < 30.0 * DAY {
        ExposureBucket::Days
    } else if seconds < 365.0 * DAY {
        ExposureBucket::Years
    } else {
        ExposureBucket::Centuries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(pwd: &str) -> ExposureBucket {
        let secret = SecretString::new(pwd.to_string().into());
        let analysis = PasswordAnalysis::of(pwd);
        estimate_exposure(&secret, &analysis)
    }

    #[test]
    fn test_empty_password() {
        // Zero pool falls back to 1, entropy 0
        assert_eq!(estimate(""), ExposureBucket::Seconds);
    }

    #[test]
    fn test_short_lowercase_cracks_in_seconds() {
        // 8 * log2(26) ~ 37.6 bits, ~21 seconds at the modeled rate
        assert_eq!(estimate("abcdefgh"), ExposureBucket::Seconds);
    }

    #[test]
    fn test_medium_lowercase() {
        // 10 * log2(26) ~ 47 bits, a few hours
        assert_eq!(estimate("abcdefghij"), ExposureBucket::Hours);
    }

    #[test]
    fn test_full_charset_hits_the_cap() {
        // 16 * log2(94) far exceeds the cap; capped guesses still land
        // beyond a year
        assert_eq!(estimate("Abcdefgh2468!@#$"), ExposureBucket::Centuries);
    }

    #[test]
    fn test_very_long_input_stays_finite() {
        let pwd = "a".repeat(10_000);
        assert_eq!(estimate(&pwd), ExposureBucket::Centuries);
    }

    #[test]
    fn test_monotonic_in_length_for_fixed_classes() {
        let mut last = ExposureBucket::Seconds;
        for len in [1, 4, 8, 10, 12, 16, 24, 40, 100] {
            let bucket = estimate(&"a".repeat(len));
            assert!(bucket >= last, "bucket regressed at length {}", len);
            last = bucket;
        }
    }
}
