//! Password strength metering library
//!
//! Scores a candidate password (0-100), reports which character-class
//! requirements it satisfies, buckets a coarse brute-force exposure
//! estimate, and generates strong random passwords covering all four
//! character classes.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation for
//!   per-keystroke callers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WEAK_PATTERNS_PATH`: Custom path to a weak-pattern file
//!   (default: `./assets/weak-patterns.txt`). Without initialization the
//!   built-in pattern list applies.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{analyze, estimate_exposure, generate};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = analyze(&password);
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.label());
//! println!("Complexity: {}", result.complexity());
//! println!("Crackable within: {}", estimate_exposure(&password, &result.analysis));
//!
//! // Generated passwords feed straight back into the analyzer
//! let generated = generate();
//! assert!(analyze(&generated).analysis.special);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod exposure;
mod generator;
mod patterns;
mod sections;
mod types;

// Public API
pub use analyzer::{analyze, MIN_SCORED_LENGTH, SHORT_PASSWORD_SCORE};
pub use exposure::{estimate_exposure, ATTACKER_GUESS_RATE, GUESS_CAP};
pub use generator::{generate, generate_with, GENERATED_LENGTH};
pub use patterns::{
    get_patterns_path, init_weak_patterns, init_weak_patterns_from_path, weak_patterns,
    WeakPatternError, DEFAULT_WEAK_PATTERNS,
};
pub use types::{
    ComplexityTier, ExposureBucket, PasswordAnalysis, StrengthLabel, StrengthResult,
    REQUIRED_LENGTH,
};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;
