//! `log` backend that writes to the host's diagnostics sink.

use log::{LevelFilter, Log, Metadata, Record};

use super::imports;

/// Forwards each record to `writeToStderr` as one UTF-8 line.
#[derive(Debug)]
pub struct HostLogger {
    level: LevelFilter,
}

impl HostLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{} {}] {}\n", record.level(), record.target(), record.args());
        write_to_stderr(line.as_bytes());
    }

    fn flush(&self) {}
}

/// Hand `bytes` to the host. Output that does not fit a `u32` length is
/// dropped.
pub(crate) fn write_to_stderr(bytes: &[u8]) {
    let Ok(len) = u32::try_from(bytes.len()) else {
        return;
    };
    // SAFETY: `bytes` outlives the call and the host only reads it.
    unsafe { imports::write_to_stderr(bytes.as_ptr(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::imports::STDERR;
    use log::Level;

    fn take_stderr() -> String {
        STDERR.with(|stderr| String::from_utf8(std::mem::take(&mut *stderr.borrow_mut())).unwrap())
    }

    #[test]
    fn test_logger_formats_line() {
        take_stderr();
        let logger = HostLogger::new(LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("fifteen_state")
                .args(format_args!("puzzle solved"))
                .build(),
        );
        assert_eq!(take_stderr(), "[INFO fifteen_state] puzzle solved\n");
    }

    #[test]
    fn test_logger_filters_level() {
        take_stderr();
        let logger = HostLogger::new(LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("fifteen_state")
                .args(format_args!("moved tile"))
                .build(),
        );
        assert_eq!(take_stderr(), "");
        assert_eq!(logger.level(), LevelFilter::Info);
    }
}
