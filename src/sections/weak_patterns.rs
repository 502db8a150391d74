//! Weak-pattern term - penalizes known-common substrings.

use secrecy::{ExposeSecret, SecretString};

use crate::patterns::matched_pattern_count;
use crate::types::PasswordAnalysis;

/// Penalty per matched weak pattern. Penalties stack across patterns.
pub const PATTERN_PENALTY: i64 = 15;

/// Subtracts [`PATTERN_PENALTY`] for every weak pattern present.
pub fn weak_pattern_term(password: &SecretString, _analysis: &PasswordAnalysis) -> i64 {
    -(matched_pattern_count(password.expose_secret()) as i64) * PATTERN_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn term(pwd: &str) -> i64 {
        let secret = SecretString::new(pwd.to_string().into());
        weak_pattern_term(&secret, &PasswordAnalysis::of(pwd))
    }

    #[test]
    #[serial]
    fn test_no_patterns() {
        crate::patterns::reset_patterns_for_testing();
        assert_eq!(term("CorrectHorseBattery!"), 0);
    }

    #[test]
    #[serial]
    fn test_single_pattern() {
        crate::patterns::reset_patterns_for_testing();
        assert_eq!(term("myQWERTYkeys"), -15);
    }

    #[test]
    #[serial]
    fn test_stacked_penalties() {
        crate::patterns::reset_patterns_for_testing();
        // "password" and "123"
        assert_eq!(term("password123"), -30);
    }
}
