// Baitcheck: rule-based phishing and fake-promotion detection
//
// This is the library root. The scorers are pure functions over immutable
// inputs; the output module renders their results for the terminal.

pub mod config;
pub mod models;
pub mod output;
pub mod scoring;

pub use models::{AccountProfile, Decision, EmptyInputError, RiskAssessment, Signal};
pub use scoring::account::{evaluate_account, AccountRiskScorer};
pub use scoring::post::{evaluate_post, PostRiskScorer};
