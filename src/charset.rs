//! Character class tables shared by the analyzer, estimator and generator.

/// Uppercase class set.
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase class set.
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// Digit class set.
pub const DIGITS: &str = "0123456789";
/// Symbol class set used by the generator.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Pool sizes assumed by the exposure estimator. The special pool models the
// full printable ASCII symbol space, which is wider than the generator's
// SPECIAL set.
pub const UPPER_POOL: f64 = 26.0;
pub const LOWER_POOL: f64 = 26.0;
pub const DIGIT_POOL: f64 = 10.0;
pub const SPECIAL_POOL: f64 = 32.0;
