//! Scoring terms
//!
//! Each term contributes one independent, swappable piece of the score;
//! the analyzer sums them and then applies the class-count ceiling.

mod ceiling;
mod classes;
mod diversity;
mod length;
mod weak_patterns;

pub use ceiling::class_count_ceiling;
pub use classes::class_coverage_term;
pub use diversity::diversity_term;
pub use length::length_bonus_term;
pub use weak_patterns::weak_pattern_term;

use crate::types::PasswordAnalysis;
use secrecy::SecretString;

/// Signature shared by all scoring terms: a signed score contribution
/// computed from the password and its class analysis.
pub type ScoreTerm = fn(&SecretString, &PasswordAnalysis) -> i64;
