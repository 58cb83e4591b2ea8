//! The two ways of computing statistics: in process and in the database.

use anyhow::{bail, Context, Result};
use demo_core::statistics::Statistics;
use demo_core::types::Record;
use duckdb::Connection;

/// Statistics over the in-memory records. `None` when `records` is empty.
pub fn statistics_from_records(records: &[Record]) -> Option<Statistics> {
    Statistics::from_values(records.iter().map(|r| r.value))
}

/// Statistics over the `records` table in a single aggregate query.
///
/// Fails if the query yields no row, if any aggregate is NULL (empty table),
/// or if a column cannot be read as a double.
pub fn statistics_from_db(conn: &Connection) -> Result<Statistics> {
    let mut stmt = conn
        .prepare(
            "SELECT AVG(value), MEDIAN(value), STDDEV_POP(value), MIN(value), MAX(value)
             FROM records",
        )
        .context("preparing statistics query")?;
    let mut rows = stmt.query([]).context("running statistics query")?;

    let Some(row) = rows.next().context("reading statistics row")? else {
        bail!("no rows returned from statistics query");
    };

    let mut columns = [None::<f64>; 5];
    for (i, column) in columns.iter_mut().enumerate() {
        *column = row
            .get(i)
            .with_context(|| format!("reading statistics column {i}"))?;
    }

    let [Some(mean), Some(median), Some(std), Some(min), Some(max)] = columns else {
        bail!("statistics query returned NULL; the records table is empty");
    };

    Ok(Statistics {
        mean,
        median,
        std,
        min,
        max,
    })
}
