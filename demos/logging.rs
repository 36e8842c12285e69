use log::{Level, LevelFilter, Log, Metadata, Record};

struct SimpleLogger;

static LOGGER: SimpleLogger = SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => 31,
            Level::Warn => 93,
            Level::Info => 34,
            Level::Debug => 32,
            Level::Trace => 36,
        };

        eprintln!(
            "\u{1B}[{}m[{:>5}] {}:{} {}\u{1B}[0m",
            color,
            record.level(),
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Installs the logger. The level comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }

    log::set_max_level(match std::env::var("RUST_LOG").as_deref() {
        Ok("ERROR" | "error") => LevelFilter::Error,
        Ok("WARN" | "warn") => LevelFilter::Warn,
        Ok("INFO" | "info") | Err(_) => LevelFilter::Info,
        Ok("DEBUG" | "debug") => LevelFilter::Debug,
        Ok("TRACE" | "trace") => LevelFilter::Trace,
        Ok(_) => LevelFilter::Off,
    });
}
