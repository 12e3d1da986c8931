/// Report summarizer
///
/// This module handles:
/// - Parsing raw report text and checking its minimal shape
/// - Resolving run-level metadata with explicit fallbacks
/// - Classifying every spec as passed / failed / flaky / skipped
/// - Building breadcrumb titles for display
///
/// The walk is deliberately two levels deep: specs directly under a file, and
/// specs under that file's immediate describe blocks.
use crate::error::ParseError;
use crate::types::{Report, Spec, Suite, TestExecution};
use log::{debug, warn};
use serde::Serialize;
use std::iter;

/// Separator between breadcrumb segments
pub const TITLE_SEPARATOR: &str = " → ";

/// Separator between a file title and a nested suite title
pub const SUITE_SEPARATOR: &str = " > ";

/// Maximum number of payload characters echoed to the log on parse failure
const PAYLOAD_PREVIEW_CHARS: usize = 500;

/// Which test execution decides a spec's status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyBy {
    /// First execution only (retries recorded later are ignored)
    #[default]
    First,
    /// Last execution, i.e. the outcome after retries
    Last,
}

impl ClassifyBy {
    fn pick<'a>(&self, spec: &'a Spec) -> Option<&'a TestExecution> {
        match self {
            ClassifyBy::First => spec.first_execution(),
            ClassifyBy::Last => spec.last_execution(),
        }
    }
}

/// Options controlling how a report is summarized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub classify_by: ClassifyBy,
}

/// Derived status and display data for one spec
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecSummary {
    pub passed: bool,
    pub failed: bool,
    pub flaky: bool,
    pub skipped: bool,
    /// Breadcrumb: project → suites → spec
    pub title: String,
    pub path: Vec<String>,
    /// Title of the top-level suite (file) the spec belongs to
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Normalized summary of a whole test run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub version: String,
    /// Total run time in milliseconds
    pub duration: f64,
    pub workers: u32,
    pub shards: u32,
    pub projects: Vec<String>,
    pub files: Vec<String>,
    pub suites: Vec<String>,
    pub specs: Vec<SpecSummary>,
    pub failed: Vec<SpecSummary>,
    pub passed: Vec<SpecSummary>,
    pub flaky: Vec<SpecSummary>,
    pub skipped: Vec<SpecSummary>,
}

impl Summary {
    /// All summarized specs, in report order
    pub fn tests(&self) -> &[SpecSummary] {
        &self.specs
    }
}

/// Parse a raw report using the default options.
pub fn parse(raw: impl AsRef<[u8]>) -> Result<Summary, ParseError> {
    parse_with(raw, &ParseOptions::default())
}

/// Parse a raw report and summarize it.
///
/// Fails when the input is not JSON, when it lacks the `config` or `suites`
/// sections, when a consumed field has the wrong type, or when a spec has no
/// test executions to classify.
pub fn parse_with(raw: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Summary, ParseError> {
    let raw = raw.as_ref();

    let value: serde_json::Value = serde_json::from_slice(raw).map_err(|e| {
        debug!("Invalid report payload: {}", payload_preview(raw));
        ParseError::Malformed(e)
    })?;

    if !has_required_sections(&value) {
        debug!("Report payload lacks config/suites: {}", payload_preview(raw));
        return Err(ParseError::MissingSections);
    }

    let report: Report = serde_json::from_value(value).map_err(|e| {
        debug!("Report payload has unexpected field types: {}", payload_preview(raw));
        ParseError::InvalidShape(e)
    })?;

    summarize_report(&report, options)
}

/// Summarize an already-deserialized report.
pub fn summarize_report(report: &Report, options: &ParseOptions) -> Result<Summary, ParseError> {
    debug!("Summarizing {} files (classify by {:?})", report.suites.len(), options.classify_by);

    let config = &report.config;
    let metadata = config.metadata.as_ref();

    // Presence checks, not truthiness: an explicit 0 is kept as 0
    let duration = metadata.and_then(|m| m.total_time).unwrap_or(0.0);
    let workers = metadata.and_then(|m| m.actual_workers).or(config.workers).unwrap_or(1);
    let shards = config.shard.as_ref().and_then(|s| s.total).unwrap_or(0);

    let projects = config.projects.iter().map(|p| p.name.clone()).collect();
    let files = report.suites.iter().map(|s| s.title.clone()).collect();
    let suites = report.suites.iter().flat_map(suite_display_names).collect();

    let mut specs = Vec::new();
    for file in &report.suites {
        let before = specs.len();

        for spec in &file.specs {
            specs.push(summarize_spec(spec, &[file], file, options.classify_by)?);
        }

        for child in &file.suites {
            if child.has_children() {
                warn!(
                    "Suite '{}{}{}' nests deeper than two levels; its inner suites are not summarized",
                    file.title, SUITE_SEPARATOR, child.title
                );
            }
            for spec in &child.specs {
                specs.push(summarize_spec(spec, &[file, child], file, options.classify_by)?);
            }
        }

        debug!("File '{}': {} suites, {} specs", file.title, file.suites.len().max(1), specs.len() - before);
    }

    Ok(Summary {
        version: config.version.clone().unwrap_or_default(),
        duration,
        workers,
        shards,
        projects,
        files,
        suites,
        failed: select(&specs, |s| s.failed),
        passed: select(&specs, |s| s.passed),
        flaky: select(&specs, |s| s.flaky),
        skipped: select(&specs, |s| s.skipped),
        specs,
    })
}

/// Classify a single spec and build its breadcrumb title.
///
/// The four flags are computed independently, so contradictory upstream data
/// (e.g. `ok: false` with status "skipped") can set more than one.
pub fn summarize_spec(
    spec: &Spec,
    parents: &[&Suite],
    file: &Suite,
    classify_by: ClassifyBy,
) -> Result<SpecSummary, ParseError> {
    let execution = classify_by.pick(spec).ok_or_else(|| ParseError::MissingTestExecution {
        file: file.title.clone(),
        title: spec.title.clone(),
    })?;

    let flaky = execution.is_flaky();
    let skipped = execution.is_skipped();
    let failed = !spec.ok || execution.is_unexpected();
    let passed = spec.ok && !skipped && !flaky && !failed;

    let path: Vec<String> = iter::once(execution.project_name.as_str())
        .chain(parents.iter().map(|suite| suite.title.as_str()))
        .chain(iter::once(spec.title.as_str()))
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();

    Ok(SpecSummary {
        passed,
        failed,
        flaky,
        skipped,
        title: path.join(TITLE_SEPARATOR),
        path,
        file: file.title.clone(),
        line: spec.line,
        column: spec.column,
    })
}

/// Display names contributed by one file: one per nested suite, or the file itself
fn suite_display_names(file: &Suite) -> Vec<String> {
    if file.has_children() {
        file.suites.iter().map(|child| format!("{}{}{}", file.title, SUITE_SEPARATOR, child.title)).collect()
    } else {
        vec![file.title.clone()]
    }
}

fn has_required_sections(value: &serde_json::Value) -> bool {
    value.as_object().is_some_and(|obj| obj.contains_key("config") && obj.contains_key("suites"))
}

fn select(specs: &[SpecSummary], predicate: impl Fn(&SpecSummary) -> bool) -> Vec<SpecSummary> {
    specs.iter().filter(|s| predicate(s)).cloned().collect()
}

fn payload_preview(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let mut preview: String = text.chars().take(PAYLOAD_PREVIEW_CHARS).collect();
    if text.chars().count() > PAYLOAD_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
