// Composition tests — scoring flowing into the presentation layer.
//
// These chain the pure scorers into terminal rendering and JSON output,
// the same path the CLI takes, without touching stdin or stdout.

use baitcheck::models::{AccountProfile, Decision, RiskAssessment};
use baitcheck::output::terminal::{render_account, render_empty_post_warning, render_post};
use baitcheck::output::{to_json, truncate_chars};
use baitcheck::{evaluate_account, evaluate_post};

fn fake_profile() -> AccountProfile {
    AccountProfile {
        followers_count: 30,
        following_count: 600,
        posts_count: 2,
        account_age_days: 10,
        is_verified: false,
        has_website: false,
        has_bio: false,
        profile_completeness: 0.1,
    }
}

#[test]
fn fake_account_renders_red_banner_and_reasons() {
    colored::control::set_override(false);
    let result = evaluate_account(&fake_profile());
    let text = render_account(&result, false);
    assert!(text.contains("PHISHING/FAKE ACCOUNT DETECTED — Risk: 100/100 | Confidence: 0.50"));
    assert!(text.contains("- High following/follower ratio"));
    assert!(text.contains("- Recently created account"));
    assert!(text.contains("+25"));
}

#[test]
fn verified_account_renders_full_confidence() {
    colored::control::set_override(false);
    let profile = AccountProfile {
        is_verified: true,
        ..fake_profile()
    };
    let result = evaluate_account(&profile);
    let text = render_account(&result, profile.is_verified);
    assert!(text.contains("LEGITIMATE ACCOUNT (Verified) — Risk: 0/100 | Confidence: 100%"));
    assert!(!text.contains("Rules fired"));
}

#[test]
fn suspicious_post_renders_probability_and_rules() {
    colored::control::set_override(false);
    let post = "Click here to claim your FREE reward now!!!";
    let result = evaluate_post(post).unwrap();
    let text = render_post(post, &result);
    assert!(text.contains("Likely phishing — Probability: 0.61"));
    assert!(text.contains("Reasons possibly indicating phishing content:"));
    assert!(text.contains("contains \"claim\""));
    assert!(text.contains("all-caps words: FREE"));
}

#[test]
fn benign_post_renders_green_indicators() {
    colored::control::set_override(false);
    let post = "Spent the afternoon repotting plants and reading a novel about sailing \
                across the Atlantic with my grandmother";
    let result = evaluate_post(post).unwrap();
    assert_eq!(result.score, 0);
    let text = render_post(post, &result);
    assert!(text.contains("Looks legitimate — Probability: 0.00"));
    assert!(text.contains("- Natural writing style"));
}

#[test]
fn empty_post_maps_to_warning() {
    colored::control::set_override(false);
    assert!(evaluate_post("  ").is_err());
    assert_eq!(render_empty_post_warning(), "Please enter a post to analyze.");
}

#[test]
fn account_json_roundtrip_keeps_decision_label() {
    let result = evaluate_account(&fake_profile());
    let json = to_json(&result).unwrap();
    assert!(json.contains("\"decision\": \"FAKE\""));
    let back: RiskAssessment = serde_json::from_str(&json).unwrap();
    assert_eq!(back.decision, Some(Decision::Fake));
    assert_eq!(back.signals.len(), result.signals.len());
}

#[test]
fn post_json_has_null_decision() {
    let result = evaluate_post("win win win").unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
    assert!(value["decision"].is_null());
    assert_eq!(value["score"], 20);
}

#[test]
fn long_posts_are_previewed_safely() {
    colored::control::set_override(false);
    let post = "\u{1F600}".repeat(200);
    let result = evaluate_post(&post).unwrap();
    let text = render_post(&post, &result);
    assert!(text.contains(&format!("{}...", "\u{1F600}".repeat(80))));
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    assert_eq!(truncate_chars("short", 10), "short");
}
