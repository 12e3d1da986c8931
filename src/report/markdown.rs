//! Markdown rendering of a test run summary.
//!
//! The document is assembled from an ordered list of paragraphs. Each
//! paragraph is trimmed, empty ones are dropped, and the rest are joined by a
//! blank line.

use super::icons::{IconKind, IconStyle, icon_for};
use crate::format::{format_duration, n, short_commit, upper_case_first};
use crate::summary::{SpecSummary, Summary};
use log::debug;

/// Caller-supplied context for the rendered document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub commit: Option<String>,
    pub message: Option<String>,
    pub title: Option<String>,
    pub report_url: Option<String>,
    pub icon_style: IconStyle,
}

/// Test categories in headline order
const HEADLINE_CATEGORIES: [Category; 4] = [Category::Failed, Category::Passed, Category::Flaky, Category::Skipped];

/// Categories that get a collapsible list; passed specs are never listed
const LISTED_CATEGORIES: [Category; 3] = [Category::Failed, Category::Flaky, Category::Skipped];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Failed,
    Passed,
    Flaky,
    Skipped,
}

impl Category {
    fn label(&self) -> &'static str {
        match self {
            Category::Failed => "failed",
            Category::Passed => "passed",
            Category::Flaky => "flaky",
            Category::Skipped => "skipped",
        }
    }

    fn icon(&self) -> IconKind {
        match self {
            Category::Failed => IconKind::Failed,
            Category::Passed => IconKind::Passed,
            Category::Flaky => IconKind::Flaky,
            Category::Skipped => IconKind::Skipped,
        }
    }

    fn specs<'a>(&self, summary: &'a Summary) -> &'a [SpecSummary] {
        match self {
            Category::Failed => &summary.failed,
            Category::Passed => &summary.passed,
            Category::Flaky => &summary.flaky,
            Category::Skipped => &summary.skipped,
        }
    }
}

/// Render a summary as a markdown document.
///
/// # Arguments
/// * `summary` - Normalized summary of the run
/// * `options` - Title, commit info, report link and icon style
pub fn render(summary: &Summary, options: &RenderOptions) -> String {
    let icon = |kind: IconKind| icon_for(kind, options.icon_style);

    let paragraphs = [
        format!("### {}", options.title.as_deref().unwrap_or_default()),
        render_headline(summary, &icon),
        "#### Details".to_string(),
        render_stats(summary, options, &icon),
        render_lists(summary),
    ];

    let kept: Vec<&str> = paragraphs.iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect();
    debug!("Rendered {} paragraphs for {} specs", kept.len(), summary.specs.len());

    kept.join("\n\n")
}

/// One bold count per non-empty category, e.g. "❌  **2 failed**"
fn render_headline(summary: &Summary, icon: &impl Fn(IconKind) -> &'static str) -> String {
    HEADLINE_CATEGORIES
        .iter()
        .filter_map(|category| {
            let count = category.specs(summary).len();
            (count > 0).then(|| format!("{}  **{} {}**", icon(category.icon()), count, category.label()))
        })
        .collect::<Vec<_>>()
        .join("  \n")
}

fn render_stats(summary: &Summary, options: &RenderOptions, icon: &impl Fn(IconKind) -> &'static str) -> String {
    let mut stats = Vec::with_capacity(4);

    if let Some(url) = &options.report_url {
        stats.push(format!("{} [Open report ↗︎]({})", icon(IconKind::Report), url));
    }

    let tests = summary.tests().len();
    let suites = summary.suites.len();
    stats.push(format!(
        "{} {} {} across {} {}",
        icon(IconKind::Stats),
        tests,
        n("test", tests),
        suites,
        n("suite", suites)
    ));

    let duration = format_duration(summary.duration);
    let duration = if duration.is_empty() { "unknown".to_string() } else { duration };
    stats.push(format!("{} {}", icon(IconKind::Duration), duration));

    match (&options.commit, &options.message) {
        (Some(commit), Some(message)) => {
            stats.push(format!("{} {} ({})", icon(IconKind::Commit), message, short_commit(commit)));
        }
        (Some(commit), None) => {
            stats.push(format!("{} {}", icon(IconKind::Commit), short_commit(commit)));
        }
        _ => {}
    }

    stats.join("  \n")
}

/// Collapsible `<details>` blocks for failed, flaky and skipped specs
fn render_lists(summary: &Summary) -> String {
    LISTED_CATEGORIES
        .iter()
        .filter_map(|category| {
            let specs = category.specs(summary);
            (!specs.is_empty()).then(|| render_details(*category, specs))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_details(category: Category, specs: &[SpecSummary]) -> String {
    let open = if category == Category::Failed { " open" } else { "" };
    let items: Vec<String> = specs.iter().map(|spec| format!("<li>{}</li>", spec.title)).collect();

    format!(
        "<details{}>\n<summary><strong>{} tests</strong></summary>\n<ul>\n{}\n</ul>\n</details>",
        open,
        upper_case_first(category.label()),
        items.join("\n")
    )
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;
