// Scoring — the two rule evaluators and the helpers they share.
//
// Both scorers are pure: same input, same output, no I/O. The RiskScorer
// trait is the seam the CLI talks to, so either evaluator can be driven
// the same way.

pub mod account;
pub mod post;

/// Upper bound of every risk score.
pub const MAX_SCORE: i64 = 100;

/// Clamp a raw additive score into the 0-100 range.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, MAX_SCORE) as u8
}

/// Map a clamped score onto 0.0-1.0.
pub fn normalize(score: u8) -> f64 {
    f64::from(score) / MAX_SCORE as f64
}

pub(crate) fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Trait for anything that turns an input into a risk assessment.
pub trait RiskScorer: Send + Sync {
    type Input: ?Sized;
    type Error;

    fn evaluate(&self, input: &Self::Input) -> Result<crate::models::RiskAssessment, Self::Error>;
}
