/// Formatting helpers shared by the summarizer and the markdown renderer
///
/// This module handles:
/// - Human-readable durations ("2 minutes, 1.5 seconds")
/// - Naive pluralization of labels
/// - Capitalizing category names
/// - Pipe-delimited markdown tables

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;

/// Length of an abbreviated commit hash
pub const SHORT_COMMIT_LEN: usize = 7;

/// Format a millisecond count as a comma-separated list of its non-zero parts.
///
/// Days, hours and minutes are whole numbers; seconds keep one decimal place.
/// Zero (or anything rounding to zero) yields an empty string.
pub fn format_duration(ms: f64) -> String {
    let ms = if ms.is_finite() && ms > 0.0 { ms } else { 0.0 };

    let days = (ms / DAY_MS).floor();
    let hours = ((ms % DAY_MS) / HOUR_MS).floor();
    let minutes = ((ms % HOUR_MS) / MINUTE_MS).floor();
    let seconds = ((ms % MINUTE_MS) / SECOND_MS * 10.0).round() / 10.0;

    let parts = [(days, "day"), (hours, "hour"), (minutes, "minute"), (seconds, "second")];

    parts
        .iter()
        .filter(|(value, _)| *value > 0.0)
        .map(|(value, label)| format!("{} {}", format_number(*value), n(label, *value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print a number without a trailing ".0" (30.0 -> "30", 1.5 -> "1.5")
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 { format!("{}", value as u64) } else { format!("{:.1}", value) }
}

/// Pluralize a label: unchanged for exactly one, otherwise with a trailing "s".
pub fn n<C: PartialEq + From<u8>>(label: &str, count: C) -> String {
    if count == C::from(1) { label.to_string() } else { format!("{}s", label) }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_case_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First seven characters of a commit hash. No validation of the hash itself.
pub fn short_commit(commit: &str) -> String {
    commit.chars().take(SHORT_COMMIT_LEN).collect()
}

/// Render rows (and optional headers) as a pipe-delimited markdown table.
///
/// The alignment row follows the first data row's width, capped at four
/// columns: first column left-aligned, the rest centered.
pub fn render_markdown_table(rows: &[Vec<String>], headers: Option<&[String]>) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let align: Vec<String> =
        [":---", ":---:", ":---:", ":---:"].iter().take(first.len()).map(|s| s.to_string()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if let Some(headers) = headers {
        lines.push(table_line(headers));
    }
    lines.push(table_line(&align));
    lines.extend(rows.iter().map(|row| table_line(row)));

    lines.join("\n")
}

fn table_line(columns: &[String]) -> String {
    format!("| {} |", columns.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero_is_empty() {
        assert_eq!(format_duration(0.0), "");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(90_000.0), "1 minute, 30 seconds");
        assert_eq!(format_duration(121_500.0), "2 minutes, 1.5 seconds");
    }

    #[test]
    fn test_format_duration_singular_second() {
        assert_eq!(format_duration(1_000.0), "1 second");
    }

    #[test]
    fn test_format_duration_skips_zero_components() {
        // 1 day + 2 seconds, no hours or minutes
        assert_eq!(format_duration(86_402_000.0), "1 day, 2 seconds");
        assert_eq!(format_duration(7_200_000.0), "2 hours");
    }

    #[test]
    fn test_format_duration_rounds_seconds() {
        assert_eq!(format_duration(1_234.0), "1.2 seconds");
        // Rounds down to nothing
        assert_eq!(format_duration(40.0), "");
    }

    #[test]
    fn test_format_duration_negative_is_empty() {
        assert_eq!(format_duration(-500.0), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(n("test", 1), "test");
        assert_eq!(n("test", 0), "tests");
        assert_eq!(n("test", 5), "tests");
        assert_eq!(n("second", 1.5), "seconds");
    }

    #[test]
    fn test_upper_case_first() {
        assert_eq!(upper_case_first("failed"), "Failed");
        assert_eq!(upper_case_first("fLAKY"), "FLAKY");
        assert_eq!(upper_case_first(""), "");
        assert_eq!(upper_case_first("é"), "É");
    }

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("1234567890abcdef"), "1234567");
        assert_eq!(short_commit("abc"), "abc");
    }

    #[test]
    fn test_render_markdown_table_empty() {
        assert_eq!(render_markdown_table(&[], None), "");
    }

    #[test]
    fn test_render_markdown_table_with_headers() {
        let rows = vec![
            vec!["chromium".to_string(), "3".to_string(), "1".to_string()],
            vec!["firefox".to_string(), "4".to_string(), "0".to_string()],
        ];
        let headers = vec!["Project".to_string(), "Passed".to_string(), "Failed".to_string()];
        let table = render_markdown_table(&rows, Some(headers.as_slice()));
        assert_eq!(
            table,
            "| Project | Passed | Failed |\n| :--- | :---: | :---: |\n| chromium | 3 | 1 |\n| firefox | 4 | 0 |"
        );
    }

    #[test]
    fn test_render_markdown_table_caps_alignment_at_four() {
        let rows = vec![(1..=6).map(|i| i.to_string()).collect::<Vec<_>>()];
        let table = render_markdown_table(&rows, None);
        let align = table.lines().next().unwrap();
        assert_eq!(align, "| :--- | :---: | :---: | :---: |");
    }
}
