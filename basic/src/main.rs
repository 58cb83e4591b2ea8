//! Inserts the values 0..9 into an in-memory DuckDB table and prints them.
//!
//! Usage:
//!   cargo run -p basic
//!   DUCKDB_DEMO_DATABASE=demo.duckdb cargo run -p basic   # on-disk database

use demo_core::config::Settings;
use std::process;

fn run(settings: &Settings) -> anyhow::Result<()> {
    let conn = demo_core::database::open(&settings.database)?;
    for value in basic::run(&conn)? {
        println!("{value}");
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
        log::error!("Basic demo failed: {e:#}");
        process::exit(1);
    }
}
