//! Reusable scratch buffer for composing one log line at a time

use super::error::{Result, UlogError};
use std::fmt::{self, Write};

/// Byte buffer with a fixed logical capacity
///
/// Writes are clamped to the remaining capacity and cut on a character
/// boundary. Once a write is clamped the line is marked truncated and later
/// writes are skipped, so the content is always a prefix of what was
/// requested. The buffer never grows during a write.
#[derive(Debug)]
pub struct ScratchBuffer {
    data: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl ScratchBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(UlogError::InvalidBufferSize { size: capacity });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|e| UlogError::allocation(capacity, e))?;

        Ok(Self {
            data,
            capacity,
            truncated: false,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Start a new line
    pub fn clear(&mut self) {
        self.data.clear();
        self.truncated = false;
    }

    /// Append one formatted stage at the current offset
    ///
    /// Returns `false` if the stage did not fit entirely.
    pub fn write_stage(&mut self, args: fmt::Arguments<'_>) -> bool {
        let _ = self.write_fmt(args);
        !self.truncated
    }

    /// Change the capacity, keeping the current allocation on failure
    ///
    /// Resizing to the current capacity is a no-op.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(UlogError::InvalidBufferSize { size: new_capacity });
        }
        if new_capacity == self.capacity {
            return Ok(());
        }

        if new_capacity > self.data.capacity() {
            let additional = new_capacity - self.data.len();
            self.data
                .try_reserve_exact(additional)
                .map_err(|e| UlogError::allocation(new_capacity, e))?;
        } else {
            self.data.truncate(new_capacity);
            self.data.shrink_to(new_capacity);
        }

        self.capacity = new_capacity;
        Ok(())
    }
}

impl Write for ScratchBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let room = self.remaining();
        if s.len() <= room {
            self.data.extend_from_slice(s.as_bytes());
            return Ok(());
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.data.extend_from_slice(&s.as_bytes()[..end]);
        self.truncated = true;
        Ok(())
    }
}
