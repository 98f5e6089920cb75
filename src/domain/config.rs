// ============================================================================
// Comparator Configuration
// Mode and NaN placement for number comparators
// ============================================================================

use super::context::{ComparatorContext, CONTEXT_ABSOLUTE};
use crate::numeric::NanPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a number comparator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparatorConfig {
    /// Compare absolute values instead of signed values
    pub absolute: bool,

    /// Where NaN sorts
    pub nan_policy: NanPolicy,

    /// Optional: descriptive context this comparator was chosen for
    pub context: Option<ComparatorContext>,
}

impl ComparatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(absolute: bool, nan_policy: NanPolicy) -> Self {
        Self {
            absolute,
            nan_policy,
            context: None,
        }
    }

    /// Builder method: Set absolute mode
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    /// Builder method: Set NaN placement
    pub fn with_nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }

    /// Builder method: Attach a context
    pub fn with_context(mut self, context: ComparatorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(context) = &self.context {
            if context.is_absolute() && !self.absolute {
                return Err(format!(
                    "Context {} requires absolute mode to be enabled",
                    context
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ComparatorConfig {
    /// Signed comparison, NaN last
    pub fn signed() -> Self {
        Self::default()
    }

    /// Absolute-value comparison, NaN last
    pub fn absolute() -> Self {
        Self::new(true, NanPolicy::Last).with_context(CONTEXT_ABSOLUTE)
    }
}
