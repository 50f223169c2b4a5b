// Post risk scoring — keyword and formatting heuristics over raw text.
//
// Keyword matching runs against the lowercased text as plain substring
// checks (so "win" also hits "winter"). The all-caps check runs against
// the original text. The result is a probability, not a label; callers
// decide where to draw the line.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::{clamp_score, normalize, to_strings, RiskScorer};
use crate::models::{EmptyInputError, RiskAssessment, Signal};

/// Terms that commonly show up in phishing and fake giveaway posts.
pub const PHISHING_KEYWORDS: &[&str] = &[
    "free",
    "win",
    "offer",
    "click",
    "verify",
    "account",
    "link",
    "limited",
    "money",
    "prize",
    "gift",
    "urgent",
    "bit.ly",
    "tinyurl",
    "login",
    "bonus",
    "giveaway",
    "congratulations",
    "lottery",
    "reward",
    "claim",
    "cash",
    "rich",
    "faster",
];

/// Weights and length bounds for the post rules.
pub struct PostRules {
    pub keyword_points: i64,
    pub exclamation_points: i64,
    pub emoji_points: i64,
    pub all_caps_points: i64,
    pub short_below_words: usize,
    pub short_points: i64,
    pub long_above_words: usize,
    pub long_points: i64,
}

pub const POST_RULES: PostRules = PostRules {
    keyword_points: 10,
    exclamation_points: 2,
    emoji_points: 2,
    all_caps_points: 5,
    short_below_words: 10,
    short_points: 10,
    long_above_words: 50,
    long_points: -5,
};

/// Probability above which a post is presented as suspicious.
pub const SUSPICIOUS_PROBABILITY: f64 = 0.5;

pub const SUSPICIOUS_RATIONALE: &[&str] = &[
    "Contains suspicious keywords like \"free\", \"click\", \"verify\"",
    "Overuse of punctuation or emojis",
    "Very short or spammy message",
];

pub const BENIGN_RATIONALE: &[&str] = &[
    "Natural writing style",
    "No scam-related keywords",
    "Balanced punctuation and tone",
];

/// Runs of emoticons, symbols & pictographs, transport & map symbols, and
/// regional-indicator flags.
static EMOJI_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}]+")
        .expect("emoji pattern is valid")
});

/// Candidate all-caps words. regex-lite's `\b` is ASCII-only, so matches
/// touching a non-ASCII letter are dropped in `all_caps_words`.
static ALL_CAPS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("all-caps pattern is valid"));

/// Unicode word character: letters, digits and underscore in any script.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace as separators go: Unicode White_Space plus the ASCII
/// file/group/record/unit separators U+001C-U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Runs of 3+ uppercase ASCII letters bounded by non-word characters on
/// both sides, so "ÜBER" and "CAFÉ" do not count.
fn all_caps_words(text: &str) -> Vec<String> {
    ALL_CAPS_WORD
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True when the text holds nothing but separators.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Raw counts extracted from a post before any weighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFeatures {
    /// Distinct keywords present, in keyword-list order
    pub matched_keywords: Vec<&'static str>,
    pub exclamation_count: usize,
    /// Number of contiguous emoji runs (not emoji characters)
    pub emoji_count: usize,
    pub all_caps_words: Vec<String>,
    pub word_count: usize,
}

/// Extract the scoring features from a post.
pub fn extract_features(text: &str) -> PostFeatures {
    let lowered = text.to_lowercase();

    let matched_keywords = PHISHING_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect();

    PostFeatures {
        matched_keywords,
        exclamation_count: lowered.matches('!').count(),
        emoji_count: EMOJI_RUN.find_iter(&lowered).count(),
        all_caps_words: all_caps_words(text),
        word_count: lowered
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .count(),
    }
}

/// Turn extracted features into the list of rules that fired.
fn fired_rules(features: &PostFeatures, rules: &PostRules) -> Vec<Signal> {
    let mut signals: Vec<Signal> = features
        .matched_keywords
        .iter()
        .map(|kw| Signal::new("keyword", format!("contains \"{kw}\""), rules.keyword_points))
        .collect();

    if features.exclamation_count > 0 {
        signals.push(Signal::new(
            "exclamations",
            format!("{} exclamation marks", features.exclamation_count),
            features.exclamation_count as i64 * rules.exclamation_points,
        ));
    }

    if features.emoji_count > 0 {
        signals.push(Signal::new(
            "emoji",
            format!("{} emoji runs", features.emoji_count),
            features.emoji_count as i64 * rules.emoji_points,
        ));
    }

    if !features.all_caps_words.is_empty() {
        signals.push(Signal::new(
            "all_caps",
            format!("all-caps words: {}", features.all_caps_words.join(", ")),
            features.all_caps_words.len() as i64 * rules.all_caps_points,
        ));
    }

    if features.word_count < rules.short_below_words {
        signals.push(Signal::new(
            "short_post",
            format!("only {} words", features.word_count),
            rules.short_points,
        ));
    } else if features.word_count > rules.long_above_words {
        signals.push(Signal::new(
            "long_post",
            format!("{} words", features.word_count),
            rules.long_points,
        ));
    }

    signals
}

/// Score a post for phishing likelihood.
///
/// Fails only when the text is empty or whitespace-only.
pub fn evaluate_post(text: &str) -> Result<RiskAssessment, EmptyInputError> {
    if is_blank(text) {
        return Err(EmptyInputError);
    }

    let features = extract_features(text);
    let signals = fired_rules(&features, &POST_RULES);
    let raw: i64 = signals.iter().map(|s| s.points).sum();
    let score = clamp_score(raw);
    let probability_fake = normalize(score);

    let rationale = if probability_fake > SUSPICIOUS_PROBABILITY {
        SUSPICIOUS_RATIONALE
    } else {
        BENIGN_RATIONALE
    };

    debug!(
        keywords = features.matched_keywords.len(),
        exclamations = features.exclamation_count,
        emoji = features.emoji_count,
        all_caps = features.all_caps_words.len(),
        words = features.word_count,
        score,
        "Scored post"
    );

    Ok(RiskAssessment {
        score,
        confidence: probability_fake,
        decision: None,
        rationale: to_strings(rationale),
        signals,
    })
}

/// Unit scorer for post text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostRiskScorer;

impl RiskScorer for PostRiskScorer {
    type Input = str;
    type Error = EmptyInputError;

    fn evaluate(&self, input: &str) -> Result<RiskAssessment, EmptyInputError> {
        evaluate_post(input)
    }
}
