//! Core ulog types and traits

pub mod appender;
pub mod call_site;
pub mod collection;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod log_level;
pub mod manager;
pub mod metrics;
pub mod module;
pub mod scratch;
pub mod semaphore;
pub mod timestamp;
pub mod ulog;

pub use appender::{Appender, SharedAppender};
pub use call_site::CallSite;
pub use collection::ModuleCollection;
pub use config::{LifecyclePolicy, UlogConfig, DEFAULT_BUFFER_SIZE};
pub use diagnostics::Diagnostics;
pub use error::{Result, UlogError};
pub use log_level::LogLevel;
pub use manager::LogManager;
pub use metrics::UlogMetrics;
pub use module::{ModuleHandle, ModuleName, MODULE_NAME_CAPACITY};
pub use scratch::ScratchBuffer;
pub use semaphore::{BinarySemaphore, SemaphorePermit};
pub use timestamp::{Clock, FixedClock, LineStamp, SystemClock};
pub use ulog::{ModuleListing, Ulog, UlogBuilder};
