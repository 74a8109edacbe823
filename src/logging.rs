//! Standard error logging backend for the `log` facade.

use std::{io::Write as _, sync::OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Process-wide logger instance handed to [`log::set_logger`].
static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Logger writing one `[LEVEL target] message` line per record to standard error.
#[derive(Debug)]
pub struct StderrLogger {
    /// Most verbose level that is written out.
    level: LevelFilter,
}

impl StderrLogger {
    /// Creates a logger that drops records more verbose than `level`.
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Formats a record the way it is written to standard error.
    pub fn format(record: &Record<'_>) -> String {
        format!(
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}

/// Installs the standard error logger at the given level.
///
/// Only the first call configures the level; later calls keep the existing logger.
///
/// # Errors
///
/// This function returns [`SetLoggerError`] if another logger was installed beforehand.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(LOGGER.get_or_init(|| StderrLogger::new(level)))?;
    log::set_max_level(level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Report;
    use log::Level;

    use super::*;

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::new(LevelFilter::Info);

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
        assert!(!StderrLogger::new(LevelFilter::Off).enabled(&info));
    }

    #[test]
    fn test_format_record() {
        let line = StderrLogger::format(
            &Record::builder()
                .level(Level::Warn)
                .target("mazepath::carving")
                .args(format_args!("carved {} passages", 3))
                .build(),
        );

        assert_eq!(line, "[WARN mazepath::carving] carved 3 passages");
    }

    #[test]
    fn test_second_init_fails_into_report() {
        let first = init(LevelFilter::Warn);
        let second = init(LevelFilter::Debug);

        assert!(first.is_ok(), "no logger is installed before this test");
        let report = Report::from(second.expect_err("a logger is already installed"));
        assert!(report.to_string().contains("logger"), "{report}");
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
}
