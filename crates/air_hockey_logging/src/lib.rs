use core::{
    fmt::{Display, Arguments},
    sync::atomic::{AtomicU8, self},
    time::Duration,
};
use std::{
    fmt::Write as _,
    io::{self, Write as _},
    time::Instant,
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

// The RwLock only makes the global logger reference settable at runtime, the logger synchronizes itself
static LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);

static START_TIME : Lazy<Instant> = Lazy::new(Instant::now);

/// Register the process-wide logger used by the logging macros
pub fn set_logger(logger: &'static Logger) {
    // Make sure timestamps are relative to the moment logging started
    Lazy::force(&START_TIME);
    *LOGGER.write() = Some(logger);
}

/// Get the process-wide logger
///
/// Panics when no logger was set, use [`try_get_logger`] when a missing logger is acceptable
pub fn get_logger() -> &'static Logger {
    match *LOGGER.read() {
        Some(logger) => logger,
        None => panic!("Logger was not set"),
    }
}

/// Get the process-wide logger, if one was set
pub fn try_get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Time elapsed since logging started
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimeStamp(Duration);

impl TimeStamp {
    /// Get the elapsed time
    pub const fn elapsed(&self) -> Duration {
        self.0
    }
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.0.as_secs();
        f.write_fmt(format_args!("{:02}:{:02}:{:02}.{:03}", secs / 3600, (secs / 60) % 60, secs % 60, self.0.subsec_millis()))
    }
}

/// Get the current timestamp
pub fn get_timestamp() -> TimeStamp {
    TimeStamp(START_TIME.elapsed())
}

/// Logging level
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// Severe error: the session can't continue
    Severe,
    /// Error: an operation failed, but the session can go on
    Error,
    /// Warning: input was ignored or replaced by a fallback
    Warning,
    /// General info
    Info,
    /// Verbose info
    Verbose,
    /// Debug info (includes verbose info)
    Debug,
}

impl LogLevel {
    fn from_u8(val: u8) -> Self {
        match val {
            0 => LogLevel::Severe,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Verbose,
            _ => LogLevel::Debug,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Severe  => f.write_str("\x1B[1m\x1B[41m\x1B[30m[SEVERE ]\x1B[0m"),
            LogLevel::Error   => f.write_str(               "\x1B[91m[ERROR  ]\x1B[0m"),
            LogLevel::Warning => f.write_str(               "\x1B[93m[WARNING]\x1B[0m"),
            LogLevel::Info    => f.write_str(               "\x1B[37m[INFO   ]\x1B[0m"),
            LogLevel::Verbose => f.write_str(               "\x1B[90m[VERBOSE]\x1B[0m"),
            LogLevel::Debug   => f.write_str(               "\x1B[94m[DEBUG  ]\x1B[0m"),
        }
    }
}

/// Log category
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    category     : &'static str,
    sub_category : Option<&'static str>
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { category: name, sub_category: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { category: name, sub_category: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sub_category {
            Some(sub) => f.write_fmt(format_args!("{}({sub})", self.category)),
            None => f.write_str(self.category),
        }
    }
}

/// Additional info about where the log occured
pub struct LogLocation {
    file : &'static str,
    line : u32,
    func : &'static str,
    time : TimeStamp,
}

impl LogLocation {
    /// Creates a new log location
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }

    /// Get the file name where the log occured
    pub const fn file(&self) -> &str {
        self.file
    }

    /// Get the line where the log occurred
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Get the function where the log occurred
    pub const fn function(&self) -> &str {
        self.func
    }

    /// Get the timestamp when the log occurred
    pub const fn timestamp(&self) -> TimeStamp {
        self.time
    }
}

struct LogLocationFormatter<'a> {
    loc   : &'a LogLocation,
    level : LogLevel
}

impl<'a> LogLocationFormatter<'a> {
    fn new(loc: &'a LogLocation, level: LogLevel) -> Self {
        Self { loc, level }
    }
}

impl<'a> Display for LogLocationFormatter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            LogLevel::Severe |
            LogLevel::Error |
            LogLevel::Debug => if self.loc.function().is_empty() {
                f.write_fmt(format_args!(" ({}:{})", self.loc.file(), self.loc.line()))
            } else {
                f.write_fmt(format_args!(" ({}:{}: {})", self.loc.file(), self.loc.line(), self.loc.function()))
            },
            LogLevel::Warning |
            LogLevel::Info |
            LogLevel::Verbose => Ok(()),
        }
    }
}

/// Get the name of the function passed in, e.g. `get_func_name(Scene::on_drag)`
pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::get_timestamp())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::get_timestamp())
    };
}

struct LoggerState {
    writers:        [Option<Box<dyn io::Write + Send>>; Self::MAX_WRITERS],
    cache:          String,
    always_flush:   bool,
    log_to_console: bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    const fn new() -> Self {
        // `Box` is not `Copy`, so the array can't be built from a repeat expression
        let writers = [
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        ];

        Self {
            writers,
            cache: String::new(),
            always_flush: false,
            log_to_console: true,
        }
    }

    fn write_message(&mut self, message: &str) {
        self.cache.push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache.write_fmt(fmt_args);
        self.flush_when_needed();
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.len() > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.cache.is_empty() {
            return;
        }

        if self.log_to_console {
            let mut stdout = io::stdout().lock();
            _ = stdout.write_all(self.cache.as_bytes());
            _ = stdout.flush();
        }

        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(self.cache.as_bytes());
            _ = writer.flush();
        }
        self.cache.clear();
    }
}

/// Logger
///
/// Supports up to 8 writers, e.g. a log file, a test buffer, an external tool, etc
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: parking_lot::const_mutex(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Get the maximum log level
    pub fn max_level(&self) -> LogLevel {
        LogLevel::from_u8(self.max_log_level.load(atomic::Ordering::Relaxed))
    }

    /// Check if a message with the given level would be logged
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to console
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Flush first, so pending messages still go where they were meant to go
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Add a writer.
    ///
    /// Returns `Ok(index)` if space was available. This index can be used to remove the writer later on.
    ///
    /// Otherwise returns an `Err` with the provided writer
    pub fn add_writer(&self, writer: Box<dyn io::Write + Send>) -> Result<usize, Box<dyn io::Write + Send>> {
        let mut state = self.state.lock();

        let empty = state.writers.iter_mut().enumerate().find(|val| val.1.is_none());
        match empty {
            Some((id, slot)) => {
                *slot = Some(writer);
                Ok(id)
            },
            None => Err(writer),
        }
    }

    /// Remove a writer from the logger, pending messages are flushed first
    pub fn remove_writer(&self, index: usize) -> Option<Box<dyn io::Write + Send>> {
        let mut state = self.state.lock();
        state.flush();
        state.writers.get_mut(index).and_then(Option::take)
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter::new(&loc, level);
            let timestamp = loc.timestamp();
            self.state.lock().format_message(format_args!("\x1B[38m{timestamp}\x1B[0m {level} [{category}]{loc_formatter}: {text}\n"));
        }
    }

    /// Log a formatted message
    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter::new(&loc, level);
            let timestamp = loc.timestamp();
            let mut state = self.state.lock();
            state.format_message(format_args!("\x1B[38m{timestamp}\x1B[0m {level} [{category}]{loc_formatter}: "));
            state.format_message(format);
            state.write_message("\n");
        }
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

// The macros are no-ops while no logger is set, so library code can log unconditionally

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Severe, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Error, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Debug, $crate::log_location!($func), format_args!($($arg)+));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const CAT : LogCategory = LogCategory::new_with_sub("Test", "Logger");

    /// Writer appending into a shared buffer, so the test can inspect the output
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn quiet_logger() -> (Logger, SharedBuffer) {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        let buffer = SharedBuffer::default();
        assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
        (logger, buffer)
    }

    #[test]
    fn category_display() {
        assert_eq!(CAT.to_string(), "Test(Logger)");
        assert_eq!(LogCategory::new("Scene").to_string(), "Scene");
    }

    #[test]
    fn timestamp_display() {
        let stamp = TimeStamp(Duration::from_millis(3_723_045));
        assert_eq!(stamp.to_string(), "01:02:03.045");
    }

    #[test]
    fn cached_until_flush() {
        let (logger, buffer) = quiet_logger();
        logger.log(CAT, LogLevel::Info, log_location!(), "hello");
        assert!(buffer.contents().is_empty());

        logger.flush();
        let out = buffer.contents();
        assert!(out.contains("[Test(Logger)]: hello\n"), "{out}");
    }

    #[test]
    fn level_filtering() {
        let (logger, buffer) = quiet_logger();
        logger.set_always_flush(true);
        logger.set_max_level(LogLevel::Warning);
        assert_eq!(logger.max_level(), LogLevel::Warning);

        logger.log_fmt(CAT, LogLevel::Info, log_location!(), format_args!("dropped {}", 1));
        logger.log_fmt(CAT, LogLevel::Error, log_location!(cached_until_flush), format_args!("kept {}", 2));

        let out = buffer.contents();
        assert!(!out.contains("dropped"));
        assert!(out.contains("kept 2"));
        // errors carry their location
        assert!(out.contains("cached_until_flush"), "{out}");
    }

    #[test]
    fn writer_slots() {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        for idx in 0..LoggerState::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(idx));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());

        assert!(logger.remove_writer(3).is_some());
        assert!(logger.remove_writer(3).is_none());
        assert!(logger.remove_writer(100).is_none());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }
}
