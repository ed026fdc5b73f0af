//! Utility functions for the theme compiler

use crate::error::{Result, ThemeError};
use crate::types::Scalar;

/// Uppercase the first character of a string, leaving the rest untouched.
/// Empty input passes through empty.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the custom property name for a (selector, property) pair:
/// `--<selector><Property>`. The property must have at least one character
/// to uppercase.
pub fn variable_name(selector: &str, property: &str) -> Result<String> {
    if property.is_empty() {
        return Err(ThemeError::empty_property_name(selector));
    }
    Ok(format!("--{}{}", selector, upper_first(property)))
}

/// Format a scalar for variable output. Numbers are treated as pixel
/// lengths; strings already carry their unit (or none) and pass through.
pub fn format_scalar(value: &Scalar) -> String {
    if value.is_number() {
        format!("{}px", value)
    } else {
        value.to_string()
    }
}
