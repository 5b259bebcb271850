use log::{Level, LevelFilter, Log, Metadata, ParseLevelError, Record};

/// `log` backend writing to the browser console.
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Component-tagged logger. The component becomes the `log` target.
pub struct Logger;

impl Logger {
    /// Install the console backend with `level` as the maximum level.
    /// Calling it again only changes the level.
    pub fn init(level: LevelFilter) {
        // Err means the backend is already installed
        let _ = log::set_logger(&CONSOLE_LOGGER);
        log::set_max_level(level);
    }

    /// Parse a level name such as `"debug"` or `"WARN"` and make it the
    /// maximum level. The current level is kept on error.
    pub fn set_level(level: &str) -> Result<LevelFilter, ParseLevelError> {
        let filter = level.trim().parse::<LevelFilter>()?;
        log::set_max_level(filter);
        Ok(filter)
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

pub fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level.as_str().to_ascii_lowercase(), component, message)
}
