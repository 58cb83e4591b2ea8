//! Basic DuckDB demo: a single-column table written and read back.

use anyhow::{Context, Result};
use duckdb::{params, Connection};

/// Number of rows the demo writes.
pub const ROW_COUNT: i32 = 10;

pub fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE t (i INTEGER)")
        .context("creating table t")?;
    Ok(())
}

/// Insert each value as its own statement execution.
///
/// The value is always bound as a parameter, never formatted into the SQL.
pub fn insert_values<I>(conn: &Connection, values: I) -> Result<()>
where
    I: IntoIterator<Item = i32>,
{
    let mut stmt = conn
        .prepare("INSERT INTO t VALUES (?)")
        .context("preparing insert into t")?;
    for value in values {
        stmt.execute(params![value])
            .with_context(|| format!("inserting {value} into t"))?;
    }
    Ok(())
}

/// All values of `t`, in whatever order the engine returns them.
pub fn select_values(conn: &Connection) -> Result<Vec<i32>> {
    let mut stmt = conn
        .prepare("SELECT * FROM t")
        .context("preparing select from t")?;
    let rows = stmt
        .query_map([], |row| row.get::<_, i32>(0))
        .context("querying t")?;

    let mut values = Vec::with_capacity(ROW_COUNT as usize);
    for r in rows {
        values.push(r.context("reading row from t")?);
    }
    Ok(values)
}

/// Full demo: create `t`, insert `0..ROW_COUNT`, read everything back.
pub fn run(conn: &Connection) -> Result<Vec<i32>> {
    create_table(conn)?;
    insert_values(conn, 0..ROW_COUNT)?;
    log::debug!("Inserted {ROW_COUNT} rows into t");
    select_values(conn)
}
