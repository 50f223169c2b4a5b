use std::env;

use anyhow::Result;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored banners and bullet lists (default)
    Text,
    /// One JSON object per assessment
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!(
                "BAITCHECK_FORMAT must be \"text\" or \"json\", got \"{other}\""
            ),
        }
    }
}

/// Presentation settings loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Scoring rules are fixed
/// constants and deliberately not part of this struct.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    /// Disable ANSI colors (BAITCHECK_NO_COLOR set to anything)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let format = match env::var("BAITCHECK_FORMAT") {
            Ok(value) if !value.is_empty() => OutputFormat::parse(&value)?,
            _ => OutputFormat::Text,
        };

        Ok(Self {
            format,
            no_color: env::var_os("BAITCHECK_NO_COLOR").is_some(),
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_is_case_insensitive() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
    }

    #[test]
    fn parse_format_rejects_unknown() {
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn cli_flag_overrides_env() {
        let config = Config {
            format: OutputFormat::Text,
            no_color: false,
        };
        assert_eq!(
            config.clone().with_format(Some(OutputFormat::Json)).format,
            OutputFormat::Json
        );
        assert_eq!(config.with_format(None).format, OutputFormat::Text);
    }
}
