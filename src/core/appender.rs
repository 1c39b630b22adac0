//! Appender trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Destination for composed log lines
///
/// `append` receives one line without its terminator; the appender writes
/// the trailing newline.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Appender shared between the service and its managers
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    let boxed: Box<dyn Appender> = Box::new(appender);
    Arc::new(Mutex::new(boxed))
}
