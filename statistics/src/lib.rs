//! DuckDB Statistics Benchmark
//!
//! Generates N synthetic records, loads them into an embedded DuckDB table and
//! computes mean, median, population standard deviation, min and max twice:
//! once over the records held in memory and once with a single aggregate
//! query. Each phase is timed and the two results are checked for agreement.
//!
//! Two load strategies are available:
//! - **Sequential**: one parameterized `INSERT` per record in one transaction
//! - **Appender**: DuckDB's bulk-load appender
//!
//! Run the benchmark: `cargo run --release -p statistics`
//! Run criterion benches: `cargo bench -p statistics`

pub mod compute;
pub mod insert;
pub mod populate;
pub mod report;
pub mod schema;
