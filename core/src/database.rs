//! Opening DuckDB connections from [`DatabaseSettings`].

use crate::config::DatabaseSettings;
use anyhow::{Context, Result};
use duckdb::{Config, Connection};

/// Open a connection as described by `settings`.
///
/// Without a path the database lives in memory and disappears with the
/// connection. Engine options are applied through [`duckdb::Config`] rather
/// than `SET` statements so no value is ever spliced into SQL text.
pub fn open(settings: &DatabaseSettings) -> Result<Connection> {
    let mut config = Config::default();
    if let Some(threads) = settings.threads {
        config = config
            .threads(threads)
            .with_context(|| format!("setting DuckDB threads to {threads}"))?;
    }

    let conn = match &settings.path {
        Some(path) => {
            log::debug!("Opening DuckDB database at {}", path.display());
            Connection::open_with_flags(path, config)
                .with_context(|| format!("opening DuckDB database {}", path.display()))?
        }
        None => {
            log::debug!("Opening in-memory DuckDB database");
            Connection::open_in_memory_with_flags(config)
                .context("opening in-memory DuckDB database")?
        }
    };

    Ok(conn)
}

/// In-memory connection with engine defaults; used by tests and benches.
pub fn open_in_memory() -> Result<Connection> {
    open(&DatabaseSettings::default())
}
