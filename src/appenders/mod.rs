//! Appender implementations

pub mod console;
pub mod memory;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use memory::MemoryAppender;

// Re-export the trait alongside its implementations
pub use crate::core::Appender;
