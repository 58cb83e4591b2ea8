//! Wall-clock measurement around fallible phases.

use std::time::{Duration, Instant};

/// Run `f`, returning its value together with the elapsed wall-clock time.
///
/// Errors from `f` are passed through untouched; nothing is timed for a
/// phase that fails.
pub fn time_phase<T, E, F>(label: &str, f: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = f()?;
    let elapsed = start.elapsed();
    log::debug!("{label} took {}", format_duration(elapsed));
    Ok((value, elapsed))
}

/// Fixed-point milliseconds, e.g. `1234.567ms`.
pub fn format_duration(d: Duration) -> String {
    format!("{:.3}ms", d.as_secs_f64() * 1e3)
}
