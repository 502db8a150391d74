//! Weak-pattern list management.
//!
//! A short list of substrings known to weaken any password containing them.
//! The built-in list is always available, so the analyzer needs no
//! initialization; an external file can replace it at startup.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in weak patterns, matched case-insensitively as substrings.
pub const DEFAULT_WEAK_PATTERNS: [&str; 5] = ["123", "password", "qwerty", "admin", "111"];

static WEAK_PATTERNS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WeakPatternError {
    #[error("Weak-pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak-pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Weak-pattern file is empty")]
    EmptyFile,
}

/// Returns the weak-pattern file path.
///
/// Priority:
/// 1. Environment variable `PWD_WEAK_PATTERNS_PATH`
/// 2. Default path `./assets/weak-patterns.txt`
pub fn get_patterns_path() -> PathBuf {
    std::env::var("PWD_WEAK_PATTERNS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/weak-patterns.txt"))
}

/// Replaces the built-in weak-pattern list from an external file.
///
/// Entirely optional: without this call the built-in
/// [`DEFAULT_WEAK_PATTERNS`] apply.
///
/// # Environment Variable
///
/// Set `PWD_WEAK_PATTERNS_PATH` to specify a custom file location.
/// If not set, defaults to `./assets/weak-patterns.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_weak_patterns() -> Result<usize, WeakPatternError> {
    let path = get_patterns_path();
    init_weak_patterns_from_path(&path)
}

/// Replaces the built-in weak-pattern list from a specific file path.
///
/// One pattern per line, lowercased on load, blank lines skipped.
/// Idempotent: a list loaded earlier stays in place.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_weak_patterns_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, WeakPatternError> {
    {
        let guard = WEAK_PATTERNS.read().unwrap();
        if let Some(list) = guard.as_ref() {
            return Ok(list.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Weak-pattern initialization FAILED: FileNotFound {:?}", path);
        return Err(WeakPatternError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Weak-pattern initialization FAILED: Empty file {:?}", path);
        return Err(WeakPatternError::EmptyFile);
    }

    let list: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = list.len();
    {
        let mut guard = WEAK_PATTERNS.write().unwrap();
        *guard = Some(list);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Weak-pattern list initialized: {} patterns from {:?}", count, path);

    Ok(count)
}

/// Returns the active weak-pattern list (loaded override or built-in).
pub fn weak_patterns() -> Vec<String> {
    let guard = WEAK_PATTERNS.read().unwrap();
    match guard.as_ref() {
        Some(list) => list.clone(),
        None => DEFAULT_WEAK_PATTERNS.iter().map(|p| p.to_string()).collect(),
    }
}

/// Counts how many weak patterns occur in the password.
///
/// Case-insensitive substring match; each listed pattern counts at most
/// once however often it occurs.
pub fn matched_pattern_count(password: &str) -> usize {
    let lower = password.to_lowercase();
    let guard = WEAK_PATTERNS.read().unwrap();
    match guard.as_deref() {
        Some(list) => list.iter().filter(|p| lower.contains(p.as_str())).count(),
        None => DEFAULT_WEAK_PATTERNS
            .iter()
            .filter(|p| lower.contains(**p))
            .count(),
    }
}

/// Resets the pattern list to the built-in defaults for testing purposes.
#[cfg(test)]
pub fn reset_patterns_for_testing() {
    let mut guard = WEAK_PATTERNS.write().unwrap();
    *guard = None;
}
