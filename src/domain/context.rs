// ============================================================================
// Comparator Context
// Descriptive markers naming how a comparator should order values
// ============================================================================

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named marker a caller can attach to a comparator choice.
///
/// Carries no behavior itself; `create_for_context` reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparatorContext {
    name: Cow<'static, str>,
}

/// Compare two values using their absolute value.
pub const CONTEXT_ABSOLUTE: ComparatorContext = ComparatorContext::new("AbsoluteValue");

impl ComparatorContext {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Create a context whose name is only known at runtime.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for `CONTEXT_ABSOLUTE`, matched by name.
    pub fn is_absolute(&self) -> bool {
        self.name == CONTEXT_ABSOLUTE.name
    }
}

impl fmt::Display for ComparatorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
