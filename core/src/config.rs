//! Environment-driven configuration.
//!
//! Every setting is optional. With nothing set the programs behave exactly
//! like the plain demos: an in-memory database, one million benchmark
//! records inserted row by row, and logging to stderr only. A `.env` file in
//! the working directory is honoured through `dotenvy`.

use anyhow::{Context, Result, bail};
use log::LevelFilter;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_DATABASE: &str = "DUCKDB_DEMO_DATABASE";
pub const ENV_THREADS: &str = "DUCKDB_DEMO_THREADS";
pub const ENV_RECORDS: &str = "DUCKDB_DEMO_RECORDS";
pub const ENV_INSERT: &str = "DUCKDB_DEMO_INSERT";
pub const ENV_LOG_LEVEL: &str = "DUCKDB_DEMO_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "DUCKDB_DEMO_LOG_FILE";
const BACKTRACE_VARS: [&str; 2] = ["RUST_BACKTRACE", "RUST_LIB_BACKTRACE"];

pub const DEFAULT_RECORD_COUNT: usize = 1_000_000;

/// Where and how to open the DuckDB database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// `None` opens a private in-memory database.
    pub path: Option<PathBuf>,
    /// Cap on DuckDB's internal worker threads; `None` keeps the engine default.
    pub threads: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
    /// Append a captured backtrace to error records.
    pub backtrace: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
            backtrace: false,
        }
    }
}

/// How the statistics benchmark loads its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertMethod {
    /// One parameterized `INSERT` per record inside a single transaction.
    #[default]
    Sequential,
    /// DuckDB's appender (bulk-load) interface.
    Appender,
}

impl FromStr for InsertMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(InsertMethod::Sequential),
            "appender" => Ok(InsertMethod::Appender),
            other => bail!("unknown insert method '{other}' (expected 'sequential' or 'appender')"),
        }
    }
}

impl fmt::Display for InsertMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertMethod::Sequential => f.write_str("sequential"),
            InsertMethod::Appender => f.write_str("appender"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSettings {
    pub record_count: usize,
    pub insert: InsertMethod,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            insert: InsertMethod::Sequential,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub log: LogSettings,
    pub bench: BenchSettings,
}

impl Settings {
    /// Read settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        load_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Settings::from_env`], but loading variables from `path` first.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        load_env_file(dotenvy::from_path(path))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let threads = parse_var::<i64>(ENV_THREADS, get(ENV_THREADS))?;
        if let Some(n) = threads {
            if n < 1 {
                bail!("{ENV_THREADS} must be at least 1, got {n}");
            }
        }

        let record_count =
            parse_var::<usize>(ENV_RECORDS, get(ENV_RECORDS))?.unwrap_or(DEFAULT_RECORD_COUNT);
        if record_count == 0 {
            bail!("{ENV_RECORDS} must be at least 1");
        }

        let level = parse_var::<LevelFilter>(ENV_LOG_LEVEL, get(ENV_LOG_LEVEL))?
            .unwrap_or(LevelFilter::Info);

        Ok(Settings {
            database: DatabaseSettings {
                path: get(ENV_DATABASE).map(PathBuf::from),
                threads,
            },
            log: LogSettings {
                level,
                file: get(ENV_LOG_FILE).map(PathBuf::from),
                backtrace: BACKTRACE_VARS.iter().any(|key| lookup(key).is_some()),
            },
            bench: BenchSettings {
                record_count,
                insert: parse_var::<InsertMethod>(ENV_INSERT, get(ENV_INSERT))?
                    .unwrap_or_default(),
            },
        })
    }
}

/// A missing env file is fine; one that fails to parse is a configuration error,
/// since `dotenvy` has already applied the lines before the bad one.
fn load_env_file<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("loading .env"),
    }
}

fn parse_var<T>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value '{value}' for {key}"))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bench.record_count, 1_000_000);
        assert_eq!(settings.bench.insert, InsertMethod::Sequential);
        assert!(settings.database.path.is_none());
        assert_eq!(settings.log.level, LevelFilter::Info);
    }

    #[test]
    fn all_variables_are_read() {
        let settings = settings_from(&[
            (ENV_DATABASE, "/tmp/demo.duckdb"),
            (ENV_THREADS, "4"),
            (ENV_RECORDS, "2500"),
            (ENV_INSERT, "Appender"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FILE, "demo.log"),
        ])
        .unwrap();

        assert_eq!(
            settings.database.path,
            Some(PathBuf::from("/tmp/demo.duckdb"))
        );
        assert_eq!(settings.database.threads, Some(4));
        assert_eq!(settings.bench.record_count, 2500);
        assert_eq!(settings.bench.insert, InsertMethod::Appender);
        assert_eq!(settings.log.level, LevelFilter::Debug);
        assert_eq!(settings.log.file, Some(PathBuf::from("demo.log")));
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let settings = settings_from(&[(ENV_RECORDS, "  "), (ENV_DATABASE, "")]).unwrap();
        assert_eq!(settings.bench.record_count, DEFAULT_RECORD_COUNT);
        assert!(settings.database.path.is_none());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = settings_from(&[(ENV_RECORDS, "lots")]).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_RECORDS), "{err:#}");

        let err = settings_from(&[(ENV_INSERT, "bulk")]).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_INSERT), "{err:#}");
    }

    #[test]
    fn zero_records_and_zero_threads_are_rejected() {
        assert!(settings_from(&[(ENV_RECORDS, "0")]).is_err());
        assert!(settings_from(&[(ENV_THREADS, "0")]).is_err());
    }

    #[test]
    fn backtrace_follows_rust_backtrace_vars() {
        assert!(!settings_from(&[]).unwrap().log.backtrace);
        assert!(settings_from(&[("RUST_BACKTRACE", "1")]).unwrap().log.backtrace);
        assert!(settings_from(&[("RUST_LIB_BACKTRACE", "full")]).unwrap().log.backtrace);
    }

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        env::temp_dir().join(format!("{prefix}_{pid}_{nanos}"))
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let dir = unique_temp_dir("duckdb_demo_env_malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        fs::write(&path, "DUCKDB_DEMO_TEST_PARTIAL=5\nTHIS IS NOT 'VALID\n").unwrap();

        let err = Settings::from_env_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("loading .env"), "{err:#}");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let path = unique_temp_dir("duckdb_demo_env_missing").join(".env");
        assert!(load_env_file(dotenvy::from_path(&path)).is_ok());
    }

    #[test]
    fn insert_method_round_trips_through_display() {
        for method in [InsertMethod::Sequential, InsertMethod::Appender] {
            assert_eq!(method.to_string().parse::<InsertMethod>().unwrap(), method);
        }
    }
}
