//! # Rust ulog
//!
//! A small per-module logger. Subsystems register a named module with its own
//! minimum level and emit lines of the form
//!
//! ```text
//! [2024-2-5 7:8:9][conn.rs][42][net][ERROR]connection reset
//! ```
//!
//! Every line is composed in one shared scratch buffer guarded by a binary
//! semaphore, so concurrent callers never interleave partial lines.
//!
//! ## Features
//!
//! - **Per-module levels**: each registered module filters on its own threshold
//! - **Two lifecycles**: explicit init/teardown, or teardown with the last module
//! - **Bounded formatting**: lines are clamped to the buffer, never grown mid-call
//! - **Injectable outputs**: stdout by default, any [`Appender`] for tests or embedding

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, CallSite, Clock, FixedClock, LifecyclePolicy, LogLevel, ModuleHandle,
        ModuleListing, Result, SystemClock, Ulog, UlogBuilder, UlogConfig, UlogError,
        UlogMetrics,
    };
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    Appender, CallSite, Clock, FixedClock, LifecyclePolicy, LogLevel, LogManager, ModuleHandle,
    ModuleListing, ModuleName, Result, SystemClock, Ulog, UlogBuilder, UlogConfig, UlogError,
    UlogMetrics, DEFAULT_BUFFER_SIZE, MODULE_NAME_CAPACITY,
};
