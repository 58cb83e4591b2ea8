//! Synthetic data: records whose value equals their index.

use demo_core::types::Record;

/// Generate `count` records with ids `0..count` and `value == id as f64`.
///
/// Fully deterministic so runs are comparable.
pub fn generate_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| Record::new(i as i64, i as f64))
        .collect()
}
