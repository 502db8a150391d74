//! Length bonus term - rewards long passwords in two steps.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{PasswordAnalysis, REQUIRED_LENGTH};

/// Bonus at the checklist length requirement.
pub const LONG_BONUS: i64 = 10;
/// Additional bonus threshold and amount.
pub const EXTRA_LENGTH: usize = 16;
pub const EXTRA_BONUS: i64 = 5;

/// +10 at 12 characters, a further +5 at 16 (cumulative).
pub fn length_bonus_term(password: &SecretString, _analysis: &PasswordAnalysis) -> i64 {
    let len = password.expose_secret().chars().count();
    let mut bonus = 0;
    if len >= REQUIRED_LENGTH {
        bonus += LONG_BONUS;
    }
    if len >= EXTRA_LENGTH {
        bonus += EXTRA_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(pwd: &str) -> i64 {
        let secret = SecretString::new(pwd.to_string().into());
        length_bonus_term(&secret, &PasswordAnalysis::of(pwd))
    }

    #[test]
    fn test_length_below_threshold() {
        assert_eq!(term("abcdefgh"), 0);
        assert_eq!(term("abcdefghijk"), 0);
    }

    #[test]
    fn test_length_first_bonus() {
        assert_eq!(term("abcdefghijkl"), 10);
        assert_eq!(term("abcdefghijklmno"), 10);
    }

    #[test]
    fn test_length_cumulative_bonus() {
        assert_eq!(term("abcdefghijklmnop"), 15);
        assert_eq!(term("abcdefghijklmnopqrstuvwx"), 15);
    }
}
