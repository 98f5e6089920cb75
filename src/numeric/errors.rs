// ============================================================================
// Comparison Errors
// Error types for rejected comparator operands
// ============================================================================

use std::fmt;

/// Which operand(s) of a comparison were not numbers, with their actual types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidOperands {
    /// Only the first operand was not a number
    First { found: &'static str },
    /// Only the second operand was not a number
    Second { found: &'static str },
    /// Neither operand was a number
    Both {
        first: &'static str,
        second: &'static str,
    },
}

/// Errors that can occur while comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareError {
    /// A present operand was not a number
    InvalidArgument(InvalidOperands),
}

impl CompareError {
    /// The operand description carried by this error.
    pub fn operands(&self) -> InvalidOperands {
        match self {
            CompareError::InvalidArgument(operands) => *operands,
        }
    }
}

impl fmt::Display for InvalidOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidOperands::First { found } => {
                write!(f, "the first argument was not a number but {}", found)
            },
            InvalidOperands::Second { found } => {
                write!(f, "the second argument was not a number but {}", found)
            },
            InvalidOperands::Both { first, second } => write!(
                f,
                "neither argument was a number; they are {} and {}",
                first, second
            ),
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::InvalidArgument(operands) => {
                write!(f, "invalid argument: {}", operands)
            },
        }
    }
}

impl std::error::Error for CompareError {}

/// Result type alias for comparator operations
pub type CompareResult<T> = Result<T, CompareError>;
