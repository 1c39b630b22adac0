//! Logging macros with call-site capture and `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use rust_ulog::prelude::*;
//! use rust_ulog::{error, info, ulog};
//!
//! let capture = MemoryAppender::new();
//! let logger = Ulog::builder().output(capture.clone()).build().unwrap();
//! let net = logger.register("net").unwrap();
//!
//! // Below the module's WARNING threshold: dropped
//! info!(logger, net, "x={}", 5);
//!
//! // Passes the threshold
//! error!(logger, net, "x={}", 5);
//! ulog!(logger, net, LogLevel::Warning, "retry {} of {}", 1, 3);
//!
//! assert_eq!(capture.line_count(), 2);
//! ```

/// Log through `logger` for `module` at an explicit level.
///
/// The current file and line are captured automatically.
#[macro_export]
macro_rules! ulog {
    ($logger:expr, $module:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($crate::call_site!(), &$module, $level, format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::ulog!($logger, $module, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::ulog!($logger, $module, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::ulog!($logger, $module, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::ulog!($logger, $module, $crate::LogLevel::Error, $($arg)+)
    };
}
