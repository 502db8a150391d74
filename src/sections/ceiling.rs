//! Class-count ceiling - caps the score when classes are missing.

use crate::types::PasswordAnalysis;

/// Score caps by satisfied class count: 30 for one class or none, 50 for
/// two, 75 for three. Applied after accumulation as a hard cap, never as a
/// bonus.
pub fn class_count_ceiling(analysis: &PasswordAnalysis) -> Option<i64> {
    match analysis.class_count() {
        0 | 1 => Some(30),
        2 => Some(50),
        3 => Some(75),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_by_class_count() {
        assert_eq!(class_count_ceiling(&PasswordAnalysis::of("")), Some(30));
        assert_eq!(class_count_ceiling(&PasswordAnalysis::of("abcdef")), Some(30));
        assert_eq!(class_count_ceiling(&PasswordAnalysis::of("abc4ef")), Some(50));
        assert_eq!(class_count_ceiling(&PasswordAnalysis::of("Abc4ef")), Some(75));
        assert_eq!(class_count_ceiling(&PasswordAnalysis::of("Abc4e!")), None);
    }
}
