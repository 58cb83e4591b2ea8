//! Report module: prints the timing and statistics of one benchmark run.

use demo_core::statistics::Statistics;
use demo_core::timing::format_duration;
use std::time::Duration;

/// Relative tolerance when comparing in-memory and database statistics.
pub const AGREEMENT_TOLERANCE: f64 = 1e-9;

/// Everything measured during one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub record_count: usize,
    pub insert_strategy: &'static str,
    pub insertion: Duration,
    pub in_memory: Statistics,
    pub in_memory_elapsed: Duration,
    pub database: Statistics,
    pub database_elapsed: Duration,
}

impl BenchReport {
    /// Time spent on the database path end to end: loading plus querying.
    pub fn database_total(&self) -> Duration {
        self.insertion + self.database_elapsed
    }

    pub fn agrees(&self) -> bool {
        self.in_memory.approx_eq(&self.database, AGREEMENT_TOLERANCE)
    }

    /// Render the report exactly as [`print_report`] prints it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", "=".repeat(60)));
        out.push_str(&format!(
            "  DuckDB statistics benchmark: {} records, {} insert\n",
            self.record_count, self.insert_strategy
        ));
        out.push_str(&format!("{}\n", "=".repeat(60)));

        out.push_str(&format!(
            "\nInsertion into DuckDB took: {}\n",
            format_duration(self.insertion)
        ));

        out.push_str("\nStatistics from records:\n");
        out.push_str(&format!("{}\n", self.in_memory));
        out.push_str(&format!(
            " took: {}\n",
            format_duration(self.in_memory_elapsed)
        ));

        out.push_str("\nStatistics from DuckDB:\n");
        out.push_str(&format!("{}\n", self.database));
        out.push_str(&format!(
            " took: {}, total including insertion: {}\n",
            format_duration(self.database_elapsed),
            format_duration(self.database_total())
        ));

        out.push_str(&format!(
            "\nAgreement (rel. tol. {:e}): {}\n",
            AGREEMENT_TOLERANCE,
            if self.agrees() { "MATCH" } else { "MISMATCH" }
        ));
        out
    }
}

pub fn print_report(report: &BenchReport) {
    println!("{}", report.render());
}
