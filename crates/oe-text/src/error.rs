//! Error types for text parsing

use std::panic::Location;
use thiserror::Error;

/// Raised when a value cannot be parsed from its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Parse failure on call to {context}: {source_text}")]
pub struct ParseError {
    /// Calling location and target type, e.g. `parse::<Point> at src/app.rs:10`
    pub context: String,
    /// The text that failed to parse
    pub source_text: String,
}

impl ParseError {
    /// Create a parse error for an arbitrary context
    pub fn new(context: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source_text: source_text.into(),
        }
    }

    /// Create a parse error naming the target type and the caller location
    pub(crate) fn at<T: ?Sized>(location: &Location<'_>, source_text: &str) -> Self {
        Self::new(
            format!(
                "parse::<{}> at {}:{}",
                short_type_name::<T>(),
                location.file(),
                location.line()
            ),
            source_text,
        )
    }
}

/// Type name with the module path stripped (`oe_text::geometry::Point` -> `Point`)
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    match full.find('<') {
        // Keep generic arguments intact
        Some(_) => full,
        None => full.rsplit("::").next().unwrap_or(full),
    }
}
