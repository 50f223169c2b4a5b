use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use baitcheck::config::{Config, OutputFormat};
use baitcheck::models::AccountProfile;
use baitcheck::output::{self, terminal};
use baitcheck::scoring::account::AccountRiskScorer;
use baitcheck::scoring::post::PostRiskScorer;
use baitcheck::scoring::RiskScorer;

/// Baitcheck: rule-based phishing and fake-promotion detection.
///
/// Scores social-media accounts and posts with fixed heuristics. No data
/// leaves your machine and nothing is stored.
#[derive(Parser)]
#[command(name = "baitcheck", version, about)]
struct Cli {
    /// Output format (overrides BAITCHECK_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an account profile
    Account(AccountArgs),

    /// Analyze a post (reads stdin when TEXT is omitted)
    Post {
        /// The post text to analyze
        text: Option<String>,
    },
}

#[derive(Args)]
struct AccountArgs {
    /// Read the profile from a JSON file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with_all = [
        "followers", "following", "posts", "age_days",
        "verified", "website", "bio", "completeness",
    ])]
    from_json: Option<PathBuf>,

    /// Followers count
    #[arg(long, default_value = "50")]
    followers: u64,

    /// Following count
    #[arg(long, default_value = "500")]
    following: u64,

    /// Posts count
    #[arg(long, default_value = "10")]
    posts: u64,

    /// Account age in days (at least 1)
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..))]
    age_days: u32,

    /// The account is verified
    #[arg(long)]
    verified: bool,

    /// The profile has a website link
    #[arg(long)]
    website: bool,

    /// The profile has a bio
    #[arg(long)]
    bio: bool,

    /// Profile completeness from 0.0 to 1.0
    #[arg(long, default_value = "0.5")]
    completeness: f64,
}

impl AccountArgs {
    fn into_profile(self) -> Result<AccountProfile> {
        let profile = match self.from_json {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("Invalid account profile in {}", path.display()))?
            }
            None => AccountProfile {
                followers_count: self.followers,
                following_count: self.following,
                posts_count: self.posts,
                account_age_days: self.age_days,
                is_verified: self.verified,
                has_website: self.website,
                has_bio: self.bio,
                profile_completeness: self.completeness,
            },
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("baitcheck=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.with_format(cli.format);
    if config.no_color {
        colored::control::set_override(false);
    }
    debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Account(args) => {
            let profile = args.into_profile()?;
            info!(
                followers = profile.followers_count,
                following = profile.following_count,
                verified = profile.is_verified,
                "Analyzing account"
            );

            let assessment = match AccountRiskScorer.evaluate(&profile) {
                Ok(assessment) => assessment,
                Err(never) => match never {},
            };

            match config.format {
                OutputFormat::Json => println!("{}", output::to_json(&assessment)?),
                OutputFormat::Text => terminal::display_account(&assessment, profile.is_verified),
            }
        }

        Commands::Post { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            info!(chars = text.chars().count(), "Analyzing post");

            match PostRiskScorer.evaluate(text.as_str()) {
                Ok(assessment) => match config.format {
                    OutputFormat::Json => println!("{}", output::to_json(&assessment)?),
                    OutputFormat::Text => terminal::display_post(&text, &assessment),
                },
                Err(e) => match config.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::json!({ "error": e.to_string() }))
                    }
                    OutputFormat::Text => println!("{}", terminal::render_empty_post_warning()),
                },
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter post text, then Ctrl-D:");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read post text from stdin")?;
    Ok(buf)
}
