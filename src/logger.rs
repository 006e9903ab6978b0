use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        // Logging must never take the process down.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} [{:<5}] {}: {}", timestamp, level, target, message)
}

/// Installs the stderr logger. Subsequent calls fail with `SetLoggerError`.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout() {
        let line = format_line(
            "2024-05-01 10:00:00.000",
            Level::Info,
            "segmenter::algorithm",
            "Converged after 3 iterations",
        );
        assert_eq!(
            line,
            "2024-05-01 10:00:00.000 [INFO ] segmenter::algorithm: Converged after 3 iterations"
        );
    }
}
