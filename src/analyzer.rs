//! Strength analyzer - orchestrates the scoring terms.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    class_count_ceiling, class_coverage_term, diversity_term, length_bonus_term,
    weak_pattern_term, ScoreTerm,
};
use crate::types::{PasswordAnalysis, StrengthResult};

/// Passwords shorter than this get a flat floor score instead of being
/// scored term by term.
pub const MIN_SCORED_LENGTH: usize = 8;

/// Floor score for nonempty passwords below [`MIN_SCORED_LENGTH`].
pub const SHORT_PASSWORD_SCORE: u8 = 10;

/// Evaluates password strength.
///
/// Total over any input: empty and arbitrarily long strings are fine, the
/// score is always within 0-100, and nothing is carried over between calls.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A [`StrengthResult`] with the score and per-requirement analysis.
pub fn analyze(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();
    let analysis = PasswordAnalysis::of(pwd);

    if length == 0 {
        return StrengthResult { score: 0, analysis, length };
    }
    if length < MIN_SCORED_LENGTH {
        return StrengthResult {
            score: SHORT_PASSWORD_SCORE,
            analysis,
            length,
        };
    }

    // Orchestrator: sum the independent scoring terms
    let terms: [(&str, ScoreTerm); 4] = [
        ("classes", class_coverage_term),
        ("diversity", diversity_term),
        ("length", length_bonus_term),
        ("patterns", weak_pattern_term),
    ];

    let mut score: i64 = 0;
    for (term_name, term) in terms {
        let delta = term(password, &analysis);
        #[cfg(feature = "tracing")]
        tracing::debug!("score term {}: {:+}", term_name, delta);
        #[cfg(not(feature = "tracing"))]
        let _ = term_name;
        score += delta;
    }

    // Hard cap when character classes are missing, applied after all terms
    if let Some(cap) = class_count_ceiling(&analysis) {
        score = score.min(cap);
    }

    StrengthResult {
        score: score.clamp(0, 100) as u8,
        analysis,
        length,
    }
}

/// Debounce applied before evaluation in [`analyze_tx`].
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the result via channel after a debounce.
///
/// Cancelling the token during the debounce suppresses the send; the
/// evaluation itself is the same total function as [`analyze`].
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled during debounce");
        return;
    }

    let result = analyze(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength result: {}", _e);
    }
}
