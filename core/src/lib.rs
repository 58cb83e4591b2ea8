//! Shared building blocks for the DuckDB demo programs.
//!
//! Both binaries (`basic` and `statistics`) link against this crate for
//! configuration, logging, connection setup, the [`types::Record`] entity and
//! the in-memory [`statistics::Statistics`] computation.

use anyhow::Context;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::{Encode, pattern::PatternEncoder},
    filter::threshold::ThresholdFilter,
};
use std::backtrace::Backtrace;

pub mod config;
pub mod database;
pub mod statistics;
pub mod timing;
pub mod types;

use config::LogSettings;

const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

/// Pattern encoder that appends a backtrace to error records when enabled.
#[derive(Debug)]
struct ErrorBacktraceEncoder {
    pattern: PatternEncoder,
    backtrace: bool,
}

impl ErrorBacktraceEncoder {
    fn boxed(settings: &LogSettings) -> Box<Self> {
        Box::new(ErrorBacktraceEncoder {
            pattern: PatternEncoder::new(LOGGING_PATTERN),
            backtrace: settings.backtrace,
        })
    }
}

impl Encode for ErrorBacktraceEncoder {
    fn encode(
        &self,
        w: &mut dyn log4rs::encode::Write,
        record: &log::Record<'_>,
    ) -> anyhow::Result<()> {
        if !self.backtrace || record.level() != log::Level::Error {
            return self.pattern.encode(w, record);
        }

        let trace = Backtrace::capture();
        self.pattern.encode(
            w,
            &log::Record::builder()
                .args(format_args!("{}\nBacktrace:\n{trace}", record.args()))
                .level(record.level())
                .target(record.target())
                .module_path(record.module_path())
                .file(record.file())
                .line(record.line())
                .build(),
        )
    }
}

/// Build the `log4rs` configuration for `settings` without installing it.
///
/// Records at or above `settings.level` always go to stderr; when
/// `settings.file` is set they are also appended to that file.
pub fn logger_config(settings: &LogSettings) -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(ErrorBacktraceEncoder::boxed(settings))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(settings.level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    if let Some(path) = &settings.file {
        let logfile = FileAppender::builder()
            .encoder(ErrorBacktraceEncoder::boxed(settings))
            .build(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root_builder = root_builder.appender("logfile");
    }

    config_builder
        .build(root_builder.build(settings.level))
        .context("building logger configuration")
}

/// Install the global `log4rs` logger.
///
/// Program output (query results, reports) is printed to stdout by the
/// binaries and never goes through the logger.
pub fn initialize_logger(settings: &LogSettings) -> anyhow::Result<()> {
    let config = logger_config(settings)?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}
