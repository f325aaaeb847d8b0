use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// `log` backend that writes to the browser console, one console method per level.
pub struct ConsoleLogger {
    level: Level,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: Level::Debug };

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, msg: &str) -> String {
    format!("[{} {}] {}", level, target, msg)
}

/// Install the console logger. Safe to call more than once; later calls are ignored.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_and_target() {
        assert_eq!(
            format_line(Level::Warn, "hud_glue::config", "bad json"),
            "[WARN hud_glue::config] bad json"
        );
    }

    #[test]
    fn debug_is_enabled_trace_is_not() {
        let debug = Metadata::builder().level(Level::Debug).build();
        let trace = Metadata::builder().level(Level::Trace).build();
        assert!(LOGGER.enabled(&debug));
        assert!(!LOGGER.enabled(&trace));
    }
}
