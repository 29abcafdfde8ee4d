//! Linear filters over the inventory. Results keep store order.

use crate::model::Record;

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Case-insensitive substring match on the name and the kind's category-like
/// field, or an exact match of the query against the id.
///
/// An empty (or all-whitespace) query matches nothing.
pub fn search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|r| {
            r.id().to_string() == query
                || r.name().to_lowercase().contains(&needle)
                || r.kind().category_like().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Records whose quantity is strictly below `threshold`.
pub fn low_stock(records: &[Record], threshold: i64) -> Vec<&Record> {
    records.iter().filter(|r| r.quantity() < threshold).collect()
}
