//! Validation utilities

use super::{Error, Result};

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_parameter(context, message));
    }
    Ok(())
}

/// Validate an exact byte length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::invalid_parameter(
            context,
            format!("invalid length (expected {}, got {})", expected, actual),
        ));
    }
    Ok(())
}
