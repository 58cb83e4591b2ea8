//! Strategies for loading records into the `records` table.
//!
//! Two implementations are provided:
//! - [`SequentialInsert`]: one parameterized statement per record, one transaction
//! - [`AppenderInsert`]: DuckDB's appender interface

use crate::schema::RECORDS_TABLE;
use anyhow::{Context, Result};
use demo_core::config::InsertMethod;
use demo_core::types::Record;
use duckdb::{params, Connection};

/// Implemented by each way of getting records into the database.
pub trait InsertStrategy {
    /// Human-readable name for reports.
    fn name(&self) -> &'static str;

    /// Write every record, failing on the first error.
    fn insert(&self, conn: &mut Connection, records: &[Record]) -> Result<()>;
}

/// `BEGIN`, one `INSERT INTO records (value) VALUES (?)` per record, `COMMIT`.
///
/// Ids are assigned by the table's sequence. If any insert fails the
/// transaction is dropped uncommitted and rolled back.
pub struct SequentialInsert;

impl InsertStrategy for SequentialInsert {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn insert(&self, conn: &mut Connection, records: &[Record]) -> Result<()> {
        let tx = conn.transaction().context("beginning insert transaction")?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO records (value) VALUES (?)")
                .context("preparing record insert")?;
            for record in records {
                stmt.execute(params![record.value])
                    .with_context(|| format!("inserting record {}", record.id))?;
            }
        }
        tx.commit().context("committing insert transaction")?;
        Ok(())
    }
}

/// Bulk load through DuckDB's appender, inside one transaction.
///
/// The appender fills every column, so ids are written explicitly as
/// `record.id + 1`, the same numbering the sequence would produce. Dropping
/// the appender flushes whatever it holds, so a failure partway through
/// relies on the uncommitted transaction being rolled back.
pub struct AppenderInsert;

impl InsertStrategy for AppenderInsert {
    fn name(&self) -> &'static str {
        "appender"
    }

    fn insert(&self, conn: &mut Connection, records: &[Record]) -> Result<()> {
        let tx = conn.transaction().context("beginning appender transaction")?;
        {
            let mut appender = tx
                .appender(RECORDS_TABLE)
                .context("creating records appender")?;
            for record in records {
                let id = i32::try_from(record.id + 1)
                    .with_context(|| format!("record id {} does not fit INTEGER", record.id))?;
                appender
                    .append_row(params![id, record.value])
                    .with_context(|| format!("appending record {}", record.id))?;
            }
            appender.flush().context("flushing records appender")?;
        }
        tx.commit().context("committing appender transaction")?;
        Ok(())
    }
}

/// The strategy selected by configuration.
pub fn strategy_for(method: InsertMethod) -> &'static dyn InsertStrategy {
    match method {
        InsertMethod::Sequential => &SequentialInsert,
        InsertMethod::Appender => &AppenderInsert,
    }
}
