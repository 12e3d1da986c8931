//! Summarize a Playwright JSON report into a markdown digest.
//!
//! The pipeline has two stages:
//!
//! ```text
//! raw report ──parse──▶ Summary ──render(options)──▶ markdown
//! ```
//!
//! Both stages are pure functions over immutable inputs.

pub mod error;
pub mod format;
pub mod report;
pub mod summary;
pub mod types;

pub use error::ParseError;
pub use report::{IconKind, IconStyle, RenderOptions, icon_for, render};
pub use summary::{ClassifyBy, ParseOptions, SpecSummary, Summary, parse, parse_with};
