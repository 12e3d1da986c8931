// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod ui;

use cli::OutputFormat;
use config::{ReportSource, RunConfig};
use log::debug;
use playwright_summary::{Summary, parse_with, render};
use std::fs;
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve and validate configuration
    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let raw = match read_report(&config.source) {
        Ok(bytes) => bytes,
        Err(e) => {
            ui::print_error(&format!("Failed to read report: {}", e));
            std::process::exit(1);
        }
    };

    let summary = match parse_with(&raw, &config.parse) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&format!("Failed to parse report: {}", e));
            std::process::exit(1);
        }
    };

    if summary.specs.is_empty() {
        ui::print_warning("Report contains no specs");
    }

    let output = match format_output(&summary, &config) {
        Ok(text) => text,
        Err(e) => {
            ui::print_error(&format!("Failed to format summary: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(&output, &config) {
        ui::print_error(&format!("Failed to write output: {}", e));
        std::process::exit(1);
    }
}

/// Read raw report bytes from a file or stdin
fn read_report(source: &ReportSource) -> io::Result<Vec<u8>> {
    match source {
        ReportSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            debug!("Read {} bytes from stdin", buf.len());
            Ok(buf)
        }
        ReportSource::File(path) => {
            let buf = fs::read(path)?;
            debug!("Read {} bytes from {}", buf.len(), path.display());
            Ok(buf)
        }
    }
}

/// Render the summary in the requested output format
fn format_output(summary: &Summary, config: &RunConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Markdown => Ok(render(summary, &config.render)),
        OutputFormat::Json => serde_json::to_string_pretty(summary),
    }
}

/// Write output to the configured file, or stdout
fn write_output(output: &str, config: &RunConfig) -> io::Result<()> {
    match &config.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))?;
            debug!("Summary saved to {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)
        }
    }
}
