//! The `records` table and its id sequence.

use anyhow::{Context, Result};
use duckdb::Connection;

pub const RECORDS_TABLE: &str = "records";

/// Create the id sequence (starting at 1) and the `records` table.
pub fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE SEQUENCE seq_records_id START 1;
         CREATE TABLE records (
             id    INTEGER DEFAULT nextval('seq_records_id'),
             value DOUBLE
         );",
    )
    .context("creating records table")?;
    Ok(())
}

pub fn record_count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM records", [], |r| r.get(0))
        .context("counting records")?;
    Ok(usize::try_from(count)?)
}
