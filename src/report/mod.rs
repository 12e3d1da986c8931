//! Report rendering module - turns a normalized summary into a CI comment.
//!
//! This module handles:
//! - Looking up icons in the selected icon set
//! - Assembling the markdown document (headline, details, collapsible lists)
//!
//! Parsing and classification live in the summary module.
//!
//! # Module Organization
//!
//! - `icons` - Icon sets (octicons, emojis) and lookup
//! - `markdown` - Markdown document assembly

mod icons;
mod markdown;

// Re-export icon lookup
pub use icons::{IconKind, IconStyle, icon_for};

// Re-export rendering
pub use markdown::{RenderOptions, render};
