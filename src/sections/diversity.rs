//! Diversity term - rewards distinct characters, capped.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::types::PasswordAnalysis;

/// Maximum contribution from character diversity.
pub const DIVERSITY_CAP: i64 = 10;

/// Awards one point per distinct character, up to [`DIVERSITY_CAP`].
pub fn diversity_term(password: &SecretString, _analysis: &PasswordAnalysis) -> i64 {
    let distinct: HashSet<char> = password.expose_secret().chars().collect();
    (distinct.len() as i64).min(DIVERSITY_CAP)
}
