//! Result types produced by the analyzer.

use std::fmt;

/// Checklist length requirement, in characters.
pub const REQUIRED_LENGTH: usize = 12;

/// Which requirements the password satisfies.
///
/// Every field is a pure predicate over the current input; nothing is
/// carried over between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordAnalysis {
    /// At least [`REQUIRED_LENGTH`] characters.
    pub length: bool,
    /// Contains A-Z.
    pub uppercase: bool,
    /// Contains a-z.
    pub lowercase: bool,
    /// Contains 0-9.
    pub number: bool,
    /// Contains a non-alphanumeric character.
    pub special: bool,
}

impl PasswordAnalysis {
    /// Computes the analysis for a password.
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count() >= REQUIRED_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied character classes (0-4, length excluded).
    pub fn class_count(&self) -> usize {
        [self.uppercase, self.lowercase, self.number, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Number of satisfied requirements including length (0-5).
    pub fn satisfied_count(&self) -> usize {
        self.class_count() + usize::from(self.length)
    }

    /// Complexity tier from the number of satisfied requirements.
    pub fn complexity(&self) -> ComplexityTier {
        match self.satisfied_count() {
            5 => ComplexityTier::Maximum,
            4 => ComplexityTier::High,
            2..=3 => ComplexityTier::Moderate,
            _ => ComplexityTier::Low,
        }
    }
}

/// Outcome of a strength evaluation. Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    /// Normalized strength score, always within 0-100.
    pub score: u8,
    /// Per-requirement breakdown.
    pub analysis: PasswordAnalysis,
    /// Input length in characters, for the caller's counter display.
    pub length: usize,
}

impl StrengthResult {
    /// Categorical label for the score. Empty input gets a distinct
    /// no-input status instead of a numeric label.
    pub fn label(&self) -> StrengthLabel {
        if self.length == 0 {
            return StrengthLabel::NoInput;
        }
        match self.score {
            80.. => StrengthLabel::VeryStrong,
            60..=79 => StrengthLabel::Strong,
            40..=59 => StrengthLabel::Medium,
            20..=39 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }

    /// Complexity tier of the underlying analysis.
    pub fn complexity(&self) -> ComplexityTier {
        self.analysis.complexity()
    }
}

/// Categorical strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    NoInput,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthLabel::NoInput => "No password entered",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        f.write_str(s)
    }
}

/// Complexity tier derived from the requirement checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplexityTier {
    Low,
    Moderate,
    High,
    Maximum,
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityTier::Low => "Low",
            ComplexityTier::Moderate => "Moderate",
            ComplexityTier::High => "High",
            ComplexityTier::Maximum => "Maximum",
        };
        f.write_str(s)
    }
}

/// Coarse time-to-crack bucket under the modeled attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExposureBucket {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Centuries,
}

impl fmt::Display for ExposureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExposureBucket::Seconds => "Seconds",
            ExposureBucket::Minutes => "Minutes",
            ExposureBucket::Hours => "Hours",
            ExposureBucket::Days => "Days",
            ExposureBucket::Years => "Years",
            ExposureBucket::Centuries => "Centuries",
        };
        f.write_str(s)
    }
}
