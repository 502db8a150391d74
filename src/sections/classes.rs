//! Class coverage term - rewards each satisfied character class.

use secrecy::SecretString;

use crate::types::PasswordAnalysis;

/// Points awarded per satisfied character class.
pub const CLASS_POINTS: i64 = 20;

/// Awards [`CLASS_POINTS`] for each of uppercase, lowercase, number and
/// special presence.
pub fn class_coverage_term(_password: &SecretString, analysis: &PasswordAnalysis) -> i64 {
    analysis.class_count() as i64 * CLASS_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(pwd: &str) -> i64 {
        let secret = SecretString::new(pwd.to_string().into());
        class_coverage_term(&secret, &PasswordAnalysis::of(pwd))
    }

    #[test]
    fn test_classes_none() {
        assert_eq!(term(""), 0);
    }

    #[test]
    fn test_classes_single() {
        assert_eq!(term("abcdefgh"), 20);
    }

    #[test]
    fn test_classes_all_four() {
        assert_eq!(term("Abcdef1!"), 80);
    }
}
