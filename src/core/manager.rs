//! Log manager: scratch buffer, binary lock and module collection

use super::{
    appender::SharedAppender,
    call_site::CallSite,
    collection::ModuleCollection,
    diagnostics::Diagnostics,
    error::Result,
    log_level::LogLevel,
    metrics::UlogMetrics,
    module::ModuleHandle,
    scratch::ScratchBuffer,
    semaphore::BinarySemaphore,
    timestamp::{Clock, LineStamp},
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Where a manager sends its lines and reports its failures
pub(crate) struct Outputs {
    pub output: SharedAppender,
    pub diagnostics: Diagnostics,
    pub metrics: UlogMetrics,
    pub clock: Arc<dyn Clock>,
}

/// One live manager
///
/// The scratch buffer is only touched while the binary semaphore is held;
/// its own mutex is therefore never contended and exists to make that
/// access safe. Collection mutations are serialized by the owning service.
pub struct LogManager {
    lock: BinarySemaphore,
    buffer: Mutex<ScratchBuffer>,
    modules: Mutex<ModuleCollection>,
}

impl LogManager {
    /// Allocate the buffer and collection and open the lock
    ///
    /// Nothing is kept if the buffer cannot be allocated.
    pub fn create(buffer_size: usize, max_modules: Option<usize>) -> Result<Self> {
        let buffer = ScratchBuffer::with_capacity(buffer_size)?;

        Ok(Self {
            lock: BinarySemaphore::new(),
            buffer: Mutex::new(buffer),
            modules: Mutex::new(ModuleCollection::with_limit(max_modules)),
        })
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer.lock().capacity()
    }

    /// Resize the scratch buffer between two log lines
    ///
    /// Waits for the lock so a line being composed is never resized under it.
    /// On failure the previous buffer stays in place.
    pub fn set_buffer_size(&self, size: usize) -> Result<()> {
        let permit = self.lock.wait()?;
        let resized = self.buffer.lock().resize(size);
        permit.release()?;
        resized
    }

    pub(crate) fn insert(&self, module: ModuleHandle) -> Result<()> {
        self.modules.lock().insert(module)
    }

    pub(crate) fn remove(&self, module: &ModuleHandle) -> Result<()> {
        self.modules.lock().remove(module)
    }

    pub(crate) fn contains(&self, module: &ModuleHandle) -> bool {
        self.modules.lock().contains(module)
    }

    pub fn module_count(&self) -> usize {
        self.modules.lock().len()
    }

    pub fn module_names(&self) -> Vec<String> {
        self.modules
            .lock()
            .iter()
            .map(|m| m.name().to_owned())
            .collect()
    }

    /// Compose one line in the scratch buffer and hand it to the output
    ///
    /// Never fails: lock and output errors go to the diagnostics channel.
    pub(crate) fn emit(
        &self,
        site: CallSite,
        module: &ModuleHandle,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        out: &Outputs,
    ) {
        let permit = match self.lock.wait() {
            Ok(permit) => permit,
            Err(e) => {
                out.diagnostics.report_error(crate::call_site!(), &e);
                out.metrics.record_dropped();
                return;
            }
        };

        {
            let mut buffer = self.buffer.lock();
            buffer.clear();
            buffer.write_stage(format_args!("{}", LineStamp(out.clock.now())));
            buffer.write_stage(format_args!(
                "[{}][{}][{}][{}]",
                site.basename(),
                site.line,
                module.name(),
                level
            ));
            buffer.write_stage(args);

            if buffer.is_truncated() {
                out.metrics.record_truncated();
            }

            let written = out.output.lock().append(buffer.as_bytes());
            match written {
                Ok(()) => {
                    out.metrics.record_emitted();
                }
                Err(e) => {
                    out.diagnostics.report_error(crate::call_site!(), &e);
                    out.metrics.record_dropped();
                }
            }
        }

        // The line is already out; a failed post is only reported
        if let Err(e) = permit.release() {
            out.diagnostics.report_error(crate::call_site!(), &e);
        }
    }

    /// Close the lock and detach every module still registered
    ///
    /// Failures are reported and cleanup continues.
    pub(crate) fn shutdown(&self, diagnostics: &Diagnostics) {
        if let Err(e) = self.lock.destroy() {
            diagnostics.report_error(crate::call_site!(), &e);
        }

        let mut modules = self.modules.lock();
        for module in modules.drain() {
            module.detach();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.lock.is_destroyed()
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("buffer_capacity", &self.buffer_capacity())
            .field("modules", &self.module_count())
            .field("lock_permits", &self.lock.available_permits())
            .finish()
    }
}
