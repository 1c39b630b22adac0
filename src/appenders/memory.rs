//! In-memory appender
//!
//! Clones share one buffer, so a test can keep a clone and inspect what the
//! logger wrote through another.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<AtomicUsize>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newlines included
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.lock().iter().filter(|&&b| b == b'\n').count()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.extend_from_slice(line);
        buffer.push(b'\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
