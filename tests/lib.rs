#![allow(dead_code)]

mod arith;
#[cfg(feature = "std")]
mod clock;
mod parse;

/// A type alias we use for tests that would rather use `?` than `unwrap()`.
type Result = std::result::Result<(), wallclock::Error>;

/// A simple logger that writes every record to stderr.
///
/// This is only enabled for the integration tests. Run them with
/// `--features logging` and call `crate::Logger::init()` to see output.
#[derive(Debug)]
struct Logger(());

const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Create a new logger that logs to stderr and initialize it as the
    /// global logger. If there was a problem setting the logger, then an
    /// error is returned.
    fn init() -> std::result::Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("{}|{}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}
