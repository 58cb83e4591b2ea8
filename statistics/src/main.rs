//! Standalone benchmark runner that prints the formatted report.
//!
//! Loads `DUCKDB_DEMO_RECORDS` synthetic records (default 1,000,000) into an
//! in-memory DuckDB table, then computes the same statistics in process and
//! with one aggregate query, timing each phase.
//!
//! Usage:
//!   cargo run --release -p statistics
//!   DUCKDB_DEMO_INSERT=appender cargo run --release -p statistics
//!   DUCKDB_DEMO_RECORDS=10000 cargo run --release -p statistics

use anyhow::Context;
use demo_core::config::Settings;
use demo_core::timing::time_phase;
use statistics::compute::{statistics_from_db, statistics_from_records};
use statistics::insert::strategy_for;
use statistics::populate::generate_records;
use statistics::report::{print_report, BenchReport};
use statistics::schema::{create_records_table, record_count};
use std::process;

fn run(settings: &Settings) -> anyhow::Result<()> {
    let count = settings.bench.record_count;
    let strategy = strategy_for(settings.bench.insert);
    println!("Inserting {count} records into duckdb ({} insert)", strategy.name());

    let mut conn = demo_core::database::open(&settings.database)?;
    create_records_table(&conn)?;

    let records = generate_records(count);

    let ((), insertion) = time_phase("insertion", || {
        strategy
            .insert(&mut conn, &records)
            .context("inserting records")
    })?;
    log::debug!("records table now holds {} rows", record_count(&conn)?);

    let (in_memory, in_memory_elapsed) = time_phase("in-memory statistics", || {
        statistics_from_records(&records).context("no records to compute statistics from")
    })?;

    let (database, database_elapsed) =
        time_phase("database statistics", || statistics_from_db(&conn))?;

    let report = BenchReport {
        record_count: count,
        insert_strategy: strategy.name(),
        insertion,
        in_memory,
        in_memory_elapsed,
        database,
        database_elapsed,
    };
    print_report(&report);

    if !report.agrees() {
        log::warn!(
            "In-memory and database statistics disagree: {:?} vs {:?}",
            report.in_memory,
            report.database
        );
    }

    Ok(())
}

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e:#}. Exiting.");
        process::exit(1);
    });

    demo_core::initialize_logger(&settings.log).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {e:#}. Exiting.");
        process::exit(1);
    });

    if let Err(e) = run(&settings) {
        log::error!("Statistics benchmark failed: {e:#}");
        process::exit(1);
    }
}
