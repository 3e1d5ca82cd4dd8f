//! Engine error taxonomy.
//!
//! These are contract violations, not runtime conditions: a correct driver
//! never triggers them. Rejected moves/rotations are ordinary `false`
//! results, not errors.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Construction-time configuration problem (bad dimensions, empty
    /// catalog, degenerate mask). Fatal: the engine is never built.
    InvalidConfig(String),
    /// Grid queried outside its dimensions. Reported loudly instead of
    /// clamping so collision bugs surface during development.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidConfig(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
            CoreError::OutOfBounds { x, y } => {
                write!(f, "grid access out of bounds at ({}, {})", x, y)
            }
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CoreError::InvalidConfig("width must be positive".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: width must be positive"
        );

        let e = CoreError::OutOfBounds { x: -1, y: 20 };
        assert_eq!(e.to_string(), "grid access out of bounds at (-1, 20)");
    }
}
