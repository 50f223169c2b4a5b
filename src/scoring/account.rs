// Account risk scoring — additive heuristics over profile attributes.
//
// Verified accounts short-circuit to a clean result. Everyone else
// accumulates points from independent rules (the sum is order-insensitive),
// gets clamped to 0-100, and is labelled FAKE at 60 or above.

use std::convert::Infallible;

use tracing::debug;

use super::{clamp_score, normalize, to_strings, RiskScorer};
use crate::models::{AccountProfile, Decision, RiskAssessment, Signal};

/// Thresholds and weights for the account rules.
///
/// Positive weights push toward FAKE, negative ones toward LEGITIMATE.
pub struct AccountRules {
    pub low_followers_below: u64,
    pub low_followers_points: i64,
    /// `(following + 1) / (followers + 1)` above this is suspicious
    pub follow_ratio_above: f64,
    pub follow_ratio_points: i64,
    pub few_posts_below: u64,
    pub few_posts_points: i64,
    pub new_account_below_days: u32,
    pub new_account_points: i64,
    pub missing_bio_points: i64,
    pub missing_website_points: i64,
    pub incomplete_profile_below: f64,
    pub incomplete_profile_points: i64,
    pub popular_above: u64,
    pub popular_points: i64,
    pub established_above_days: u32,
    pub established_points: i64,
    /// Scores at or above this are labelled FAKE
    pub fake_threshold: u8,
}

pub const ACCOUNT_RULES: AccountRules = AccountRules {
    low_followers_below: 50,
    low_followers_points: 20,
    follow_ratio_above: 3.0,
    follow_ratio_points: 25,
    few_posts_below: 5,
    few_posts_points: 10,
    new_account_below_days: 60,
    new_account_points: 20,
    missing_bio_points: 10,
    missing_website_points: 5,
    incomplete_profile_below: 0.4,
    incomplete_profile_points: 10,
    popular_above: 1000,
    popular_points: -10,
    established_above_days: 180,
    established_points: -10,
    fake_threshold: 60,
};

pub const VERIFIED_RATIONALE: &[&str] = &["Verified account detected, considered safe by rule."];

pub const FAKE_RATIONALE: &[&str] = &[
    "High following/follower ratio",
    "Low followers or few posts",
    "Recently created account",
];

pub const LEGITIMATE_RATIONALE: &[&str] = &[
    "Good followers/following balance",
    "Decent account age",
    "Complete bio and website",
];

/// Follow ratio with +1 smoothing, so zero followers never divides by zero.
pub fn follow_ratio(following: u64, followers: u64) -> f64 {
    (following as f64 + 1.0) / (followers as f64 + 1.0)
}

/// Certainty of the account decision: 1.0 at score 50, falling to 0.5 at 0 and 100.
pub fn decision_confidence(score: u8) -> f64 {
    1.0 - (0.5 - normalize(score)).abs()
}

/// Collect every rule that fires for a non-verified profile.
fn fired_rules(profile: &AccountProfile, rules: &AccountRules) -> Vec<Signal> {
    let mut signals = Vec::new();

    if profile.followers_count < rules.low_followers_below {
        signals.push(Signal::new(
            "low_followers",
            format!("{} followers", profile.followers_count),
            rules.low_followers_points,
        ));
    }

    let ratio = follow_ratio(profile.following_count, profile.followers_count);
    if ratio > rules.follow_ratio_above {
        signals.push(Signal::new(
            "follow_ratio",
            format!("following/follower ratio {ratio:.2}"),
            rules.follow_ratio_points,
        ));
    }

    if profile.posts_count < rules.few_posts_below {
        signals.push(Signal::new(
            "few_posts",
            format!("{} posts", profile.posts_count),
            rules.few_posts_points,
        ));
    }

    if profile.account_age_days < rules.new_account_below_days {
        signals.push(Signal::new(
            "new_account",
            format!("{} days old", profile.account_age_days),
            rules.new_account_points,
        ));
    }

    if !profile.has_bio {
        signals.push(Signal::new("missing_bio", "no bio", rules.missing_bio_points));
    }

    if !profile.has_website {
        signals.push(Signal::new(
            "missing_website",
            "no website link",
            rules.missing_website_points,
        ));
    }

    if profile.profile_completeness < rules.incomplete_profile_below {
        signals.push(Signal::new(
            "incomplete_profile",
            format!("profile {:.0}% complete", profile.profile_completeness * 100.0),
            rules.incomplete_profile_points,
        ));
    }

    if profile.followers_count > rules.popular_above {
        signals.push(Signal::new(
            "popular",
            format!("{} followers", profile.followers_count),
            rules.popular_points,
        ));
    }

    if profile.account_age_days > rules.established_above_days {
        signals.push(Signal::new(
            "established",
            format!("{} days old", profile.account_age_days),
            rules.established_points,
        ));
    }

    signals
}

/// Score an account profile.
///
/// Assumes the profile already passed [`AccountProfile::validate`]; the
/// scorer itself never fails.
pub fn evaluate_account(profile: &AccountProfile) -> RiskAssessment {
    let rules = &ACCOUNT_RULES;

    if profile.is_verified {
        debug!("Verified account, skipping rules");
        return RiskAssessment {
            score: 0,
            confidence: 1.0,
            decision: Some(Decision::Legitimate),
            rationale: to_strings(VERIFIED_RATIONALE),
            signals: Vec::new(),
        };
    }

    let signals = fired_rules(profile, rules);
    let raw: i64 = signals.iter().map(|s| s.points).sum();
    let score = clamp_score(raw);
    let confidence = decision_confidence(score);

    let (decision, rationale) = if score >= rules.fake_threshold {
        (Decision::Fake, FAKE_RATIONALE)
    } else {
        (Decision::Legitimate, LEGITIMATE_RATIONALE)
    };

    debug!(
        raw,
        score,
        confidence = format!("{:.2}", confidence),
        decision = decision.as_str(),
        rules_fired = signals.len(),
        "Scored account"
    );

    RiskAssessment {
        score,
        confidence,
        decision: Some(decision),
        rationale: to_strings(rationale),
        signals,
    }
}

/// Unit scorer for account profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountRiskScorer;

impl RiskScorer for AccountRiskScorer {
    type Input = AccountProfile;
    type Error = Infallible;

    fn evaluate(&self, input: &AccountProfile) -> Result<RiskAssessment, Infallible> {
        Ok(evaluate_account(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AccountProfile {
        AccountProfile {
            followers_count: 200,
            following_count: 150,
            posts_count: 40,
            account_age_days: 100,
            is_verified: false,
            has_website: true,
            has_bio: true,
            profile_completeness: 0.8,
        }
    }

    #[test]
    fn neutral_profile_fires_nothing() {
        let result = evaluate_account(&profile());
        assert_eq!(result.score, 0);
        assert!(result.signals.is_empty());
        assert_eq!(result.decision, Some(Decision::Legitimate));
    }

    #[test]
    fn ratio_uses_plus_one_smoothing() {
        // 0 followers, 3 following: 4 / 1 = 4.0
        assert!((follow_ratio(3, 0) - 4.0).abs() < 1e-9);
        // 0 followers, 0 following: 1 / 1
        assert!((follow_ratio(0, 0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_exactly_three_does_not_fire() {
        // (149 + 1) / (49 + 1) = 3.0, not > 3
        let p = AccountProfile {
            followers_count: 49,
            following_count: 149,
            ..profile()
        };
        let result = evaluate_account(&p);
        assert!(result.signals.iter().all(|s| s.rule != "follow_ratio"));
        assert_eq!(result.score, 20);
    }

    #[test]
    fn confidence_peaks_at_midpoint() {
        assert!((decision_confidence(0) - 0.5).abs() < 1e-9);
        assert!((decision_confidence(50) - 1.0).abs() < 1e-9);
        assert!((decision_confidence(100) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fake_threshold_is_inclusive() {
        // 20 (low followers) + 20 (new) + 10 (bio) + 10 (posts) = 60
        let p = AccountProfile {
            followers_count: 40,
            following_count: 40,
            posts_count: 1,
            account_age_days: 30,
            has_bio: false,
            ..profile()
        };
        let result = evaluate_account(&p);
        assert_eq!(result.score, 60);
        assert_eq!(result.decision, Some(Decision::Fake));
    }
}
