use thiserror::Error;

/// Errors raised while turning raw report text into a summary
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Report is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Report is missing the `config` and `suites` sections")]
    MissingSections,

    #[error("Report has an unexpected structure: {0}")]
    InvalidShape(#[source] serde_json::Error),

    #[error("Spec '{title}' in {file} has no test executions")]
    MissingTestExecution { file: String, title: String },
}
