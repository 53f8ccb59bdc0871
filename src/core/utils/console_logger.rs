//! `log` backend that forwards records to the browser console.
//!
//! Installed once from `init()`; native builds and tests leave `log` without a
//! backend, so the macros stay no-ops there.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let msg: wasm_bindgen::JsValue = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. A second call (or another logger already in
/// place) leaves the existing backend untouched.
pub fn init_console_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_level_and_target() {
        assert_eq!(
            format_record(Level::Warn, "slime_engine::simulation", "rejected configuration update"),
            "[WARN] slime_engine::simulation: rejected configuration update"
        );
    }

    #[test]
    fn enabled_follows_the_max_level() {
        log::set_max_level(LevelFilter::Info);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let trace = Metadata::builder().level(Level::Trace).target("t").build();
        assert!(LOGGER.enabled(&warn));
        assert!(!LOGGER.enabled(&trace));
    }
}
