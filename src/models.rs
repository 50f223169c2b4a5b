// Data models — the inputs and outputs that flow through both scorers.
//
// These are plain values built fresh for every evaluation. Nothing here
// is persisted or shared between calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured attributes of a social-media account.
///
/// Counts are unsigned so negative values are unrepresentable. The two
/// remaining preconditions (age >= 1, completeness in 0.0-1.0) are checked
/// by [`AccountProfile::validate`] at the input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    /// Days since the account was created (must be at least 1)
    pub account_age_days: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub has_website: bool,
    #[serde(default)]
    pub has_bio: bool,
    /// Fraction of optional profile fields filled in (0.0-1.0)
    pub profile_completeness: f64,
}

/// Why an [`AccountProfile`] was rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("account age must be at least 1 day")]
    ZeroAccountAge,
    #[error("profile completeness must be between 0.0 and 1.0, got {0}")]
    CompletenessOutOfRange(f64),
}

impl AccountProfile {
    /// Check the input contract the account scorer relies on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.account_age_days == 0 {
            return Err(ProfileError::ZeroAccountAge);
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.profile_completeness) {
            return Err(ProfileError::CompletenessOutOfRange(
                self.profile_completeness,
            ));
        }
        Ok(())
    }
}

/// Post text was empty or whitespace-only, so there is nothing to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("post text is empty; please provide a post to analyze")]
pub struct EmptyInputError;

/// Discrete verdict for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Legitimate,
    Fake,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Legitimate => "LEGITIMATE",
            Decision::Fake => "FAKE",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule that fired during scoring, with its signed contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Stable rule identifier, e.g. `low_followers` or `keyword`
    pub rule: String,
    /// Human-readable description of what triggered the rule
    pub detail: String,
    pub points: i64,
}

impl Signal {
    pub(crate) fn new(rule: &str, detail: impl Into<String>, points: i64) -> Self {
        Self {
            rule: rule.to_string(),
            detail: detail.into(),
            points,
        }
    }
}

/// Output of either scorer.
///
/// For accounts, `confidence` is the certainty of `decision`. For posts,
/// `confidence` holds the phishing probability (`score / 100`) and
/// `decision` is `None`; the caller applies its own display threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Clamped risk score, 0-100
    pub score: u8,
    pub confidence: f64,
    pub decision: Option<Decision>,
    /// Static explanation lines chosen by outcome
    pub rationale: Vec<String>,
    /// Rules that actually fired, in evaluation order
    pub signals: Vec<Signal>,
}

impl RiskAssessment {
    /// Phishing probability for post assessments (alias of `confidence`).
    pub fn probability_fake(&self) -> f64 {
        self.confidence
    }
}
