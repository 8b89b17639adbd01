//! Console Logger
//!
//! A `log` backend for code running in the browser. Records go to the
//! level-matched `console.*` method on wasm32 and to stderr elsewhere,
//! so the same call sites work in native tests.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that prefixes every line with a bracketed component tag
pub struct ConsoleLogger {
    prefix: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(prefix: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            prefix: prefix.into(),
            level,
        }
    }

    /// Render one record as a console line, e.g. `[ProgramFilter] Loaded 3 programs`
    pub fn format_line(&self, record: &Record) -> String {
        if record.level() <= Level::Info {
            format!("[{}] {}", self.prefix, record.args())
        } else {
            // Debug/trace lines carry the module path to make them greppable
            format!(
                "[{}] {}: {}",
                self.prefix,
                record.target(),
                record.args()
            )
        }
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
        write_line(record.level(), &self.format_line(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug => web_sys::console::debug_1(&line),
        Level::Trace => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first (e.g. the module was
/// started twice on the same page).
pub fn init(prefix: impl Into<String>, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(prefix, level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_for(logger: &ConsoleLogger, level: Level, message: &str) -> String {
        logger.format_line(
            &Record::builder()
                .level(level)
                .target("program_filter::sync")
                .args(format_args!("{}", message))
                .build(),
        )
    }

    #[test]
    fn test_info_line_has_prefix_only() {
        let logger = ConsoleLogger::new("ProgramFilter", LevelFilter::Info);
        assert_eq!(
            line_for(&logger, Level::Info, "Attached"),
            "[ProgramFilter] Attached"
        );
    }

    #[test]
    fn test_debug_line_includes_target() {
        let logger = ConsoleLogger::new("ProgramFilter", LevelFilter::Debug);
        assert_eq!(
            line_for(&logger, Level::Debug, "Baseline has 3 options"),
            "[ProgramFilter] program_filter::sync: Baseline has 3 options"
        );
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new("ProgramFilter", LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
