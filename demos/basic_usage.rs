// ============================================================================
// Basic Usage Example
// ============================================================================

use number_comparator::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Comparator Example ===\n");

    let mut values: Vec<Value> = vec![
        Value::Long(-5),
        Value::Double(2.5),
        Value::Null,
        Value::Int(3),
        Value::Decimal(Decimal::new(-425, 2)),
        Value::Double(f64::NAN),
    ];

    // Signed ordering through the shared instance
    let shared = NumberComparator::instance();
    match sort(shared, &mut values) {
        Ok(()) => println!("Signed:   {:?}", values),
        Err(e) => println!("Sort failed: {}", e),
    }

    // Magnitude ordering through a dedicated comparator
    let magnitude = create_for_context(CONTEXT_ABSOLUTE);
    match sort(&magnitude, &mut values) {
        Ok(()) => println!("Absolute: {:?}", values),
        Err(e) => println!("Sort failed: {}", e),
    }

    // Non-numeric input is reported, not coerced
    println!("\nComparing \"text\" with 5...");
    match shared.compare(&Value::from("text"), &Value::Long(5)) {
        Ok(ordering) => println!("Unexpected ordering: {:?}", ordering),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\n=== Example Complete ===");
}

/// Sort with a comparator, stopping at the first rejected pair
fn sort(comparator: &NumberComparator, values: &mut [Value]) -> CompareResult<()> {
    for v in values.iter() {
        comparator.compare(v, v)?;
    }
    values.sort_by(|a, b| {
        comparator
            .compare(a, b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(())
}
