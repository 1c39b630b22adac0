//! The logging service
//!
//! `Ulog` owns at most one [`LogManager`] at a time and exposes the whole
//! lifecycle: explicit `initialize`/`teardown`, lazy creation on the first
//! `register`, and (under [`LifecyclePolicy::ReferenceCounted`]) teardown
//! when the last module unregisters. Applications normally build one and
//! pass it around; [`Ulog::global`] provides a process-wide instance for
//! code that cannot.

use super::{
    appender::{shared, Appender, SharedAppender},
    call_site::CallSite,
    config::{LifecyclePolicy, UlogConfig},
    diagnostics::Diagnostics,
    error::{Result, UlogError},
    log_level::LogLevel,
    manager::{LogManager, Outputs},
    metrics::UlogMetrics,
    module::ModuleHandle,
    timestamp::{Clock, SystemClock},
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Ulog> = OnceLock::new();

pub struct Ulog {
    config: UlogConfig,
    manager: RwLock<Option<Arc<LogManager>>>,
    outputs: Outputs,
}

impl Ulog {
    /// Service with the default configuration writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            UlogConfig::default(),
            shared(ConsoleAppender::new()),
            shared(ConsoleAppender::stderr()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_config(config: UlogConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn builder() -> UlogBuilder {
        UlogBuilder::new()
    }

    /// Process-wide service, created with defaults on first use
    pub fn global() -> &'static Ulog {
        GLOBAL.get_or_init(Ulog::new)
    }

    fn from_parts(
        config: UlogConfig,
        output: SharedAppender,
        fallback: SharedAppender,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            manager: RwLock::new(None),
            outputs: Outputs {
                output,
                diagnostics: Diagnostics::new(fallback),
                metrics: UlogMetrics::new(),
                clock,
            },
        }
    }

    pub fn config(&self) -> &UlogConfig {
        &self.config
    }

    pub fn metrics(&self) -> &UlogMetrics {
        &self.outputs.metrics
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.outputs.diagnostics
    }

    fn current(&self) -> Option<Arc<LogManager>> {
        self.manager.read().clone()
    }

    fn create_manager(&self, buffer_size: usize) -> Result<Arc<LogManager>> {
        LogManager::create(buffer_size, self.config.max_modules)
            .map(Arc::new)
            .map_err(|e| {
                self.outputs
                    .diagnostics
                    .report(crate::call_site!(), format_args!("ulog init error: {}", e));
                e
            })
    }

    /// Create the manager with a `buffer_size`-byte scratch buffer
    pub fn initialize(&self, buffer_size: usize) -> Result<()> {
        let mut slot = self.manager.write();
        if slot.is_some() {
            return Err(UlogError::AlreadyInitialized);
        }
        *slot = Some(self.create_manager(buffer_size)?);
        Ok(())
    }

    /// Destroy the manager, detaching any module still registered
    ///
    /// Does nothing when there is no manager.
    pub fn teardown(&self) {
        let manager = self.manager.write().take();
        if let Some(manager) = manager {
            manager.shutdown(&self.outputs.diagnostics);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.manager.read().is_some()
    }

    /// Scratch buffer capacity of the live manager
    pub fn buffer_size(&self) -> Option<usize> {
        self.current().map(|m| m.buffer_capacity())
    }

    /// Resize the scratch buffer; equal sizes are a no-op
    ///
    /// A failed resize leaves the previous buffer in use.
    pub fn set_buffer_size(&self, size: usize) -> Result<()> {
        let manager = self.current().ok_or(UlogError::NotInitialized)?;
        manager.set_buffer_size(size).map_err(|e| {
            self.outputs.diagnostics.report_error(crate::call_site!(), &e);
            e
        })
    }

    /// Register a module, creating the manager first if there is none
    ///
    /// The module starts at the configured default level (WARNING unless
    /// configured otherwise). Names longer than
    /// [`MODULE_NAME_CAPACITY`](crate::MODULE_NAME_CAPACITY) bytes are cut.
    pub fn register(&self, name: &str) -> Result<ModuleHandle> {
        let mut slot = self.manager.write();
        let manager = match slot.as_ref() {
            Some(manager) => Arc::clone(manager),
            None => {
                let manager = self.create_manager(self.config.buffer_size)?;
                *slot = Some(Arc::clone(&manager));
                manager
            }
        };

        let module = ModuleHandle::new(name, self.config.default_level);
        if let Err(e) = manager.insert(module.clone()) {
            self.outputs.diagnostics.report_error(crate::call_site!(), &e);
            module.detach();
            if self.config.lifecycle == LifecyclePolicy::ReferenceCounted
                && manager.module_count() == 0
            {
                slot.take();
                manager.shutdown(&self.outputs.diagnostics);
            }
            return Err(e);
        }

        Ok(module)
    }

    /// Unregister a module; the handle and all its clones become inert
    ///
    /// Handles that are already detached, or that belong to another service,
    /// are ignored.
    pub fn unregister(&self, module: ModuleHandle) {
        let mut slot = self.manager.write();
        let Some(manager) = slot.as_ref().map(Arc::clone) else {
            return;
        };

        // Only the collection that holds the entry may detach it
        if !manager.contains(&module) {
            return;
        }
        if !module.detach() {
            return;
        }
        if let Err(e) = manager.remove(&module) {
            self.outputs.diagnostics.report_error(crate::call_site!(), &e);
        }

        if self.config.lifecycle == LifecyclePolicy::ReferenceCounted
            && manager.module_count() == 0
        {
            slot.take();
            manager.shutdown(&self.outputs.diagnostics);
        }
    }

    #[inline]
    pub fn set_level(&self, module: &ModuleHandle, level: LogLevel) {
        module.set_level(level);
    }

    pub fn module_count(&self) -> usize {
        self.current().map_or(0, |m| m.module_count())
    }

    /// Snapshot of the registered modules in collection order
    pub fn list_modules(&self) -> ModuleListing {
        ModuleListing {
            names: self.current().map(|m| m.module_names()).unwrap_or_default(),
        }
    }

    /// Write [`list_modules`](Self::list_modules) to the output appender
    pub fn show_modules(&self) -> Result<()> {
        let listing = self.list_modules().to_string();
        let mut output = self.outputs.output.lock();
        for line in listing.lines() {
            output.append(line.as_bytes())?;
        }
        output.flush()
    }

    /// Emit one line for `module` at `level`
    ///
    /// Silent when the handle is detached, the level is below the module's
    /// threshold, or there is no manager. Never returns an error.
    pub fn log(
        &self,
        site: CallSite,
        module: &ModuleHandle,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        if !module.is_registered() {
            return;
        }
        if !module.enabled(level) {
            self.outputs.metrics.record_filtered();
            return;
        }

        let Some(manager) = self.current() else {
            return;
        };
        manager.emit(site, module, level, args, &self.outputs);
    }

    pub fn flush(&self) -> Result<()> {
        self.outputs.output.lock().flush()
    }
}

impl Default for Ulog {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Ulog {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for Ulog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulog")
            .field("config", &self.config)
            .field("manager", &*self.manager.read())
            .field("output", &self.outputs.output.lock().name())
            .finish()
    }
}

/// Registered module names, printed as a count followed by one name per line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleListing {
    pub names: Vec<String>,
}

impl ModuleListing {
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

impl fmt::Display for ModuleListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modules: {}", self.names.len())?;
        for name in &self.names {
            write!(f, "\n  {}", name)?;
        }
        Ok(())
    }
}

/// Builder for constructing a [`Ulog`] service
///
/// # Example
/// ```
/// use rust_ulog::prelude::*;
///
/// let capture = MemoryAppender::new();
/// let ulog = Ulog::builder()
///     .buffer_size(256)
///     .lifecycle(LifecyclePolicy::Explicit)
///     .output(capture.clone())
///     .build()
///     .unwrap();
///
/// let net = ulog.register("net").unwrap();
/// rust_ulog::error!(ulog, net, "x={}", 5);
/// assert!(capture.contents().contains("[net][ERROR]x=5"));
/// ```
pub struct UlogBuilder {
    config: UlogConfig,
    output: Option<SharedAppender>,
    fallback: Option<SharedAppender>,
    clock: Option<Arc<dyn Clock>>,
}

impl UlogBuilder {
    pub fn new() -> Self {
        Self {
            config: UlogConfig::default(),
            output: None,
            fallback: None,
            clock: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: UlogConfig) -> Self {
        self.config = config;
        self
    }

    /// Scratch buffer size for managers created by `register`
    #[must_use = "builder methods return a new value"]
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn lifecycle(mut self, policy: LifecyclePolicy) -> Self {
        self.config.lifecycle = policy;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.config.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_modules(mut self, limit: usize) -> Self {
        self.config.max_modules = Some(limit);
        self
    }

    /// Destination for log lines (stdout by default)
    #[must_use = "builder methods return a new value"]
    pub fn output<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.output = Some(shared(appender));
        self
    }

    /// Destination for internal diagnostics (stderr by default)
    #[must_use = "builder methods return a new value"]
    pub fn fallback<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.fallback = Some(shared(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Result<Ulog> {
        self.config.validate()?;

        Ok(Ulog::from_parts(
            self.config,
            self.output.unwrap_or_else(|| shared(ConsoleAppender::new())),
            self.fallback.unwrap_or_else(|| shared(ConsoleAppender::stderr())),
            self.clock
                .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>),
        ))
    }
}

impl Default for UlogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
