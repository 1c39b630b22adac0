//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    /// Appender writing to standard output
    pub fn new() -> Self {
        Self::default()
    }

    /// Appender writing to standard error, used as the fallback channel
    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        // Line and newline go out under one stream lock so they stay together
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(line)?;
                out.write_all(b"\n")?;
            }
            ConsoleTarget::Stderr => {
                let mut err = std::io::stderr().lock();
                err.write_all(line)?;
                err.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
