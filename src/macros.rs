/// Logs a structured line routed through the named component.
/// Usage:
/// ```rust
/// use log::Level;
/// devscout::scout_log!(Level::Info, "scheduler", "Cycle started");
/// devscout::scout_log!(Level::Error, "config", "Config load failed: {}", "oops");
/// ```
/// The component lands in the log record target, so the fern dispatch in
/// `main` renders it once alongside timestamp, pid and tid:
/// [2025-08-25T16:32:10+02:00][ERROR][config][pid=4568][tid=1824] Config load failed
#[macro_export]
macro_rules! scout_log {
    ($level:expr, $component:expr, $fmt:expr $(, $($arg:tt)+)?) => {
        log::log!(target: $component, $level, $fmt $(, $($arg)+)?);
    };
}

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    /// A tiny in-memory logger that captures up to DEBUG.
    struct MemoryLogger {
        buffer: Mutex<String>,
    }

    impl MemoryLogger {
        const fn new() -> Self {
            MemoryLogger { buffer: Mutex::new(String::new()) }
        }

        fn take(&self) -> String {
            std::mem::take(&mut *self.buffer.lock().unwrap())
        }
    }

    static LOGGER: MemoryLogger = MemoryLogger::new();

    impl Log for MemoryLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }
        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                let mut buf = self.buffer.lock().unwrap();
                buf.push_str(&format!("[{}] {}\n", record.target(), record.args()));
            }
        }
        fn flush(&self) {}
    }

    #[test]
    fn scout_log_routes_component_and_payload() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Debug);
        LOGGER.take();

        scout_log!(Level::Debug, "scanner::wifi", "Answer={}!", 42);

        let output = LOGGER.take();
        assert!(output.contains("[scanner::wifi]"), "missing component: {}", output);
        assert!(output.contains("Answer=42!"), "missing payload: {}", output);
    }
}
