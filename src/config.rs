/// Configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Mapping CLI choices onto parse and render options
/// - Validating argument combinations up front
use crate::cli::{ClassifyByArg, CliArgs, IconStyleArg, OutputFormat};
use log::debug;
use playwright_summary::{ClassifyBy, IconStyle, ParseOptions, RenderOptions};
use std::path::PathBuf;

/// Where the raw report comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Stdin,
    File(PathBuf),
}

/// Fully resolved, immutable settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: ReportSource,
    pub parse: ParseOptions,
    pub render: RenderOptions,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Build a complete RunConfig from CLI arguments
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig, String> {
    args.validate()?;

    let source = if args.reads_stdin() { ReportSource::Stdin } else { ReportSource::File(args.report.clone()) };
    debug!("Reading report from {:?}", source);

    let parse = ParseOptions { classify_by: resolve_classify_by(args.classify_by) };
    if parse.classify_by == ClassifyBy::Last {
        debug!("Classifying specs by their last test execution");
    }

    let render = RenderOptions {
        commit: args.commit.clone(),
        message: args.message.clone(),
        title: Some(args.title.clone()),
        report_url: args.report_url.clone(),
        icon_style: resolve_icon_style(args.icon_style),
    };

    Ok(RunConfig { source, parse, render, format: args.format, output: args.output.clone() })
}

fn resolve_icon_style(arg: IconStyleArg) -> IconStyle {
    match arg {
        IconStyleArg::Octicons => IconStyle::Octicons,
        IconStyleArg::Emojis => IconStyle::Emojis,
    }
}

fn resolve_classify_by(arg: ClassifyByArg) -> ClassifyBy {
    match arg {
        ClassifyByArg::First => ClassifyBy::First,
        ClassifyByArg::Last => ClassifyBy::Last,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
