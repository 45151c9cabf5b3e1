use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// ConsoleLogger prints log records in the form `LEVEL: message`. Warnings and errors go to
/// stderr, everything else to stdout.
#[derive(Debug)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    /// format_record returns the line printed for a record with the given level and message.
    pub fn format_record(level: Level, msg: &std::fmt::Arguments) -> String {
        let tag = match level {
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        format!("{}: {}", tag, msg)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = ConsoleLogger::format_record(record.level(), record.args());
        if record.level() <= Level::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn flush(&self) {}
}

/// init_logging installs the console logger. Debug records are only shown if `debug` is set.
pub fn init_logging(debug: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}
