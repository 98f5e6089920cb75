// ============================================================================
// Comparator Factory
// Creates number comparators with proper configuration
// ============================================================================

use crate::domain::{ComparatorConfig, ComparatorContext};
use crate::engine::NumberComparator;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number comparator from configuration
///
/// # Arguments
/// * `config` - Comparator configuration
///
/// # Returns
/// * `Result<NumberComparator, String>` - Configured comparator or error
///
/// # Example
/// ```
/// use number_comparator::prelude::*;
///
/// let comparator = create_from_config(ComparatorConfig::absolute()).unwrap();
/// assert!(comparator.is_absolute());
/// ```
pub fn create_from_config(config: ComparatorConfig) -> Result<NumberComparator, String> {
    // Validate configuration first
    config.validate()?;

    tracing::debug!(
        "Creating number comparator: absolute={}, nan_policy={:?}",
        config.absolute,
        config.nan_policy
    );

    Ok(NumberComparator::with_config(config))
}

/// Creates a number comparator for a context marker
///
/// `CONTEXT_ABSOLUTE` yields a comparator in absolute mode; any other context
/// yields a signed one. The context is kept on the comparator.
pub fn create_for_context(context: ComparatorContext) -> NumberComparator {
    let config = ComparatorConfig::signed()
        .with_absolute(context.is_absolute())
        .with_context(context);

    tracing::debug!("Creating number comparator for context {:?}", config.context);

    NumberComparator::with_config(config)
}
