//! Console Logger
//!
//! `log` backend for the browser. On `wasm32` records go to the matching
//! `console.*` method; elsewhere they go to stderr so native test runs still
//! show them.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing `HH:MM:SS.mmm LEVEL [target] message` lines
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&stamp, record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Build one log line
pub fn format_line(stamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", stamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line("12:00:01.250", Level::Info, "activity_todo_ui::app", "loaded 3 todos");
        assert_eq!(line, "12:00:01.250 INFO  [activity_todo_ui::app] loaded 3 todos");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let info = Metadata::builder().level(Level::Info).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
