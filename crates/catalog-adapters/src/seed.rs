//! Sample products loaded into a fresh catalog.

use chrono::{DateTime, Utc};

use crate::repository::{ProductRecord, format_timestamp};

/// Highest id used by [`sample_products`]; counters start after it.
pub const LAST_SAMPLE_ID: u64 = 3;

/// The three sample records, all stamped with `now`.
pub fn sample_products(now: DateTime<Utc>) -> Vec<ProductRecord> {
    let at = format_timestamp(now);
    let record = |id: &str, name: &str, description: &str, price: f64, stock: i64| ProductRecord {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        stock,
        created_at: at.clone(),
        updated_at: at.clone(),
    };

    vec![
        record("1", "Laptop HP", "HP 15 inch laptop, 8GB RAM", 899.99, 10),
        record("2", "Mouse Logitech", "Ergonomic wireless mouse", 29.99, 50),
        record("3", "Mechanical Keyboard", "RGB mechanical keyboard", 79.99, 25),
    ]
}
