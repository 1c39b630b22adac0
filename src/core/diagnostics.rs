//! Fallback channel for internal failures
//!
//! Lines have the shape `[<file>][<line>]<message>`; primitive errors render
//! their message as `<operation> errno:<code>`.

use super::appender::SharedAppender;
use super::call_site::CallSite;
use super::error::UlogError;
use std::fmt::{self, Write};

#[derive(Clone)]
pub struct Diagnostics {
    sink: SharedAppender,
}

impl Diagnostics {
    pub fn new(sink: SharedAppender) -> Self {
        Self { sink }
    }

    /// Write one diagnostic line; failures of the fallback itself are ignored
    pub fn report(&self, site: CallSite, message: fmt::Arguments<'_>) {
        let mut line = String::new();
        let _ = write!(line, "{}{}", site, message);

        let mut sink = self.sink.lock();
        let _ = sink.append(line.as_bytes());
        let _ = sink.flush();
    }

    pub fn report_error(&self, site: CallSite, err: &UlogError) {
        self.report(site, format_args!("{}", err));
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("sink", &self.sink.lock().name())
            .finish()
    }
}

/// Report through a [`Diagnostics`] channel, tagging the current call site
#[macro_export]
macro_rules! ulog_diag {
    ($diag:expr, $($arg:tt)+) => {
        $diag.report($crate::call_site!(), format_args!($($arg)+))
    };
}
