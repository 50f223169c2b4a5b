// Colored terminal output for account and post verdicts.
//
// Each render_* function builds the full report as a String so it can be
// checked in tests; the display_* wrappers just print it.

use std::fmt::Write;

use colored::Colorize;

use crate::models::{Decision, RiskAssessment, Signal};
use crate::scoring::post::SUSPICIOUS_PROBABILITY;

/// Longest post preview shown above a post verdict.
const PREVIEW_CHARS: usize = 80;

/// Render an account verdict banner, rationale and fired rules.
pub fn render_account(assessment: &RiskAssessment, verified: bool) -> String {
    let mut out = String::new();

    let banner = match assessment.decision {
        _ if verified => format!(
            "LEGITIMATE ACCOUNT (Verified) — Risk: 0/100 | Confidence: {:.0}%",
            assessment.confidence * 100.0
        )
        .green()
        .bold(),
        Some(Decision::Fake) => format!(
            "PHISHING/FAKE ACCOUNT DETECTED — Risk: {}/100 | Confidence: {:.2}",
            assessment.score, assessment.confidence
        )
        .red()
        .bold(),
        _ => format!(
            "LEGITIMATE ACCOUNT — Risk: {}/100 | Confidence: {:.2}",
            assessment.score, assessment.confidence
        )
        .green()
        .bold(),
    };
    let _ = writeln!(out, "\n{banner}");

    let heading = match assessment.decision {
        Some(Decision::Fake) => "Reasons possibly indicating fake behavior:",
        _ if verified => "Why:",
        _ => "Indicators of legitimacy:",
    };
    write_rationale(&mut out, heading, &assessment.rationale);
    write_signals(&mut out, &assessment.signals);

    out
}

/// Render a post verdict with its probability, rationale and fired rules.
pub fn render_post(text: &str, assessment: &RiskAssessment) -> String {
    let mut out = String::new();

    let preview = super::truncate_chars(text.trim(), PREVIEW_CHARS);
    let _ = writeln!(out, "\n  {}", format!("\"{preview}\"").dimmed());

    let probability = assessment.probability_fake();
    let suspicious = probability > SUSPICIOUS_PROBABILITY;
    let banner = if suspicious {
        format!("Likely phishing — Probability: {probability:.2}")
            .red()
            .bold()
    } else {
        format!("Looks legitimate — Probability: {probability:.2}")
            .green()
            .bold()
    };
    let _ = writeln!(out, "{banner}");

    let heading = if suspicious {
        "Reasons possibly indicating phishing content:"
    } else {
        "Indicators of legitimate content:"
    };
    write_rationale(&mut out, heading, &assessment.rationale);
    write_signals(&mut out, &assessment.signals);

    out
}

/// Render the warning shown when the post text is blank.
pub fn render_empty_post_warning() -> String {
    "Please enter a post to analyze.".yellow().to_string()
}

pub fn display_account(assessment: &RiskAssessment, verified: bool) {
    print!("{}", render_account(assessment, verified));
}

pub fn display_post(text: &str, assessment: &RiskAssessment) {
    print!("{}", render_post(text, assessment));
}

fn write_rationale(out: &mut String, heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n  {}", heading.bold());
    for line in lines {
        let _ = writeln!(out, "    - {line}");
    }
}

fn write_signals(out: &mut String, signals: &[Signal]) {
    if signals.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n  {}", "Rules fired:".dimmed());
    for signal in signals {
        let points = format!("{:+}", signal.points);
        let colored_points = if signal.points > 0 {
            points.red()
        } else {
            points.green()
        };
        let _ = writeln!(
            out,
            "    {:>4}  {}",
            colored_points,
            signal.detail.dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(score: u8, decision: Option<Decision>) -> RiskAssessment {
        RiskAssessment {
            score,
            confidence: score as f64 / 100.0,
            decision,
            rationale: vec!["because".to_string()],
            signals: vec![Signal::new("keyword", "contains \"free\"", 10)],
        }
    }

    #[test]
    fn fake_account_banner() {
        colored::control::set_override(false);
        let text = render_account(&assessment(75, Some(Decision::Fake)), false);
        assert!(text.contains("PHISHING/FAKE ACCOUNT DETECTED — Risk: 75/100 | Confidence: 0.75"));
        assert!(text.contains("Reasons possibly indicating fake behavior:"));
        assert!(text.contains("- because"));
        assert!(text.contains("+10"));
    }

    #[test]
    fn verified_banner_shows_full_confidence() {
        colored::control::set_override(false);
        let mut result = assessment(0, Some(Decision::Legitimate));
        result.confidence = 1.0;
        let text = render_account(&result, true);
        assert!(text.contains("(Verified)"));
        assert!(text.contains("Confidence: 100%"));
    }

    #[test]
    fn post_at_threshold_is_not_suspicious() {
        colored::control::set_override(false);
        let text = render_post("hello", &assessment(50, None));
        assert!(text.contains("Looks legitimate — Probability: 0.50"));
    }
}
