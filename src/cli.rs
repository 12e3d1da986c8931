use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Icon set used in the rendered markdown
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyleArg {
    Octicons,
    Emojis,
}

/// Which test execution classifies a spec
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyByArg {
    /// First execution (ignores retries)
    First,
    /// Last execution (outcome after retries)
    Last,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown comment body
    Markdown,
    /// Normalized summary as JSON
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "playwright-summary")]
#[command(about = "Summarize a Playwright JSON report as a markdown CI comment")]
#[command(version)]
pub struct CliArgs {
    /// Path to the JSON report ("-" reads from stdin)
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Title shown at the top of the summary
    #[arg(long, default_value = "Playwright test results")]
    pub title: String,

    /// Commit hash the tests ran against (abbreviated to 7 characters)
    #[arg(long, value_name = "SHA")]
    pub commit: Option<String>,

    /// Commit message shown next to the abbreviated commit (requires --commit)
    #[arg(long, requires = "commit")]
    pub message: Option<String>,

    /// Link to the full HTML report
    #[arg(long, value_name = "URL")]
    pub report_url: Option<String>,

    /// Icon set for statuses and stats
    #[arg(long, value_enum, default_value = "octicons")]
    pub icon_style: IconStyleArg,

    /// Classify each spec by its first or last test execution
    #[arg(long, value_enum, default_value = "first")]
    pub classify_by: ClassifyByArg,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Treat blank optional values as absent
        args.commit = args.commit.take().filter(|s| !s.trim().is_empty());
        args.message = args.message.take().filter(|s| !s.trim().is_empty());

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.message.is_some() && self.commit.is_none() {
            return Err("--message requires a non-empty --commit".to_string());
        }

        if let Some(ref url) = self.report_url
            && url.trim().is_empty()
        {
            return Err("--report-url must not be empty".to_string());
        }

        Ok(())
    }

    /// Should the report be read from stdin?
    pub fn reads_stdin(&self) -> bool {
        self.report.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            report: PathBuf::from("results.json"),
            title: "Playwright test results".to_string(),
            commit: None,
            message: None,
            report_url: None,
            icon_style: IconStyleArg::Octicons,
            classify_by: ClassifyByArg::First,
            format: OutputFormat::Markdown,
            output: None,
        }
    }

    #[test]
    fn test_validate_message_without_commit_fails() {
        let args = CliArgs { message: Some("Fix".to_string()), ..base_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_empty_report_url_fails() {
        let args = CliArgs { report_url: Some("  ".to_string()), ..base_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_valid_config_succeeds() {
        let args = CliArgs {
            commit: Some("abcdef1234".to_string()),
            message: Some("Fix".to_string()),
            report_url: Some("https://example.com".to_string()),
            ..base_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::try_parse_from([
            "playwright-summary",
            "report.json",
            "--icon-style",
            "emojis",
            "--classify-by",
            "last",
            "--format",
            "json",
        ])
        .expect("Should parse");
        assert_eq!(args.icon_style, IconStyleArg::Emojis);
        assert_eq!(args.classify_by, ClassifyByArg::Last);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = CliArgs { report: PathBuf::from("-"), ..base_args() };
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_message_requires_commit_at_parse_time() {
        let result = CliArgs::try_parse_from(["playwright-summary", "report.json", "--message", "Fix"]);
        assert!(result.is_err());
    }
}
