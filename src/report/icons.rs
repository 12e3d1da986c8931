//! Icon sets for the markdown summary.
//!
//! Octicons are rendered as small inline images; emojis are plain glyphs that
//! work anywhere markdown is shown.

use std::fmt;
use std::str::FromStr;

/// Named icon set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconStyle {
    /// GitHub octicons served as 14px images
    #[default]
    Octicons,
    /// Unicode emojis
    Emojis,
}

impl IconStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Octicons => "octicons",
            IconStyle::Emojis => "emojis",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "octicons" => Ok(IconStyle::Octicons),
            "emojis" => Ok(IconStyle::Emojis),
            other => Err(format!("Unknown icon style '{}' (expected 'octicons' or 'emojis')", other)),
        }
    }
}

/// What an icon stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Failed,
    Passed,
    Flaky,
    Skipped,
    Stats,
    Duration,
    Link,
    Report,
    Commit,
    Info,
}

/// Look up the glyph for an icon in the given style.
pub fn icon_for(kind: IconKind, style: IconStyle) -> &'static str {
    match style {
        IconStyle::Octicons => octicon(kind),
        IconStyle::Emojis => emoji(kind),
    }
}

fn octicon(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Failed => "![failed](https://icongr.am/octicons/stop.svg?size=14&color=da3633)",
        IconKind::Passed => "![passed](https://icongr.am/octicons/check-circle.svg?size=14&color=3fb950)",
        IconKind::Flaky => "![flaky](https://icongr.am/octicons/alert.svg?size=14&color=d29922)",
        IconKind::Skipped => "![skipped](https://icongr.am/octicons/skip.svg?size=14&color=0967d9)",
        IconKind::Stats => "![stats](https://icongr.am/octicons/pulse.svg?size=14&color=abb4bf)",
        IconKind::Duration => "![duration](https://icongr.am/octicons/clock.svg?size=14&color=abb4bf)",
        IconKind::Link => "![link](https://icongr.am/octicons/link-external.svg?size=14&color=abb4bf)",
        IconKind::Report => "![report](https://icongr.am/octicons/package.svg?size=14&color=abb4bf)",
        IconKind::Commit => "![commit](https://icongr.am/octicons/git-pull-request.svg?size=14&color=abb4bf)",
        IconKind::Info => "![info](https://icongr.am/octicons/info.svg?size=14&color=abb4bf)",
    }
}

fn emoji(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Failed => "❌",
        IconKind::Passed => "✅",
        IconKind::Flaky => "⚠️",
        IconKind::Skipped => "⏭️",
        IconKind::Stats => "📊",
        IconKind::Duration => "⏱️",
        IconKind::Link => "🔗",
        IconKind::Report => "📋",
        IconKind::Commit => "📝",
        IconKind::Info => "ℹ️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_style_from_str() {
        assert_eq!("octicons".parse::<IconStyle>(), Ok(IconStyle::Octicons));
        assert_eq!("emojis".parse::<IconStyle>(), Ok(IconStyle::Emojis));
        assert!("sparkles".parse::<IconStyle>().is_err());
    }

    #[test]
    fn test_icon_style_round_trips_through_display() {
        for style in [IconStyle::Octicons, IconStyle::Emojis] {
            assert_eq!(style.to_string().parse::<IconStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_emoji_icons() {
        assert_eq!(icon_for(IconKind::Failed, IconStyle::Emojis), "❌");
        assert_eq!(icon_for(IconKind::Passed, IconStyle::Emojis), "✅");
    }

    #[test]
    fn test_octicons_are_markdown_images() {
        let icon = icon_for(IconKind::Flaky, IconStyle::Octicons);
        assert!(icon.starts_with("![flaky]("));
        assert!(icon.contains("alert.svg"));
    }
}
