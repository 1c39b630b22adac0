//! Module registry entries
//!
//! A module is a named subsystem with its own minimum level. The handle
//! returned by registration is shared with the manager's collection; once
//! the module is unregistered the handle is detached and logging through it
//! does nothing.

use super::log_level::LogLevel;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Maximum number of bytes kept from a module name
pub const MODULE_NAME_CAPACITY: usize = 31;

/// Fixed-capacity module name
///
/// Longer names are cut to [`MODULE_NAME_CAPACITY`] bytes on a character
/// boundary; nothing is ever stored past the fixed array.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleName {
    bytes: [u8; MODULE_NAME_CAPACITY],
    len: u8,
}

impl ModuleName {
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MODULE_NAME_CAPACITY);
        while !name.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; MODULE_NAME_CAPACITY];
        bytes[..end].copy_from_slice(&name.as_bytes()[..end]);

        Self {
            bytes,
            len: end as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

#[derive(Debug)]
struct ModuleEntry {
    name: ModuleName,
    level: AtomicU8,
    registered: AtomicBool,
}

/// Handle to a registered module
///
/// Cloning a handle does not register anything new; all clones refer to the
/// same entry and compare equal by identity.
#[derive(Clone)]
pub struct ModuleHandle {
    entry: Arc<ModuleEntry>,
}

impl ModuleHandle {
    pub(crate) fn new(name: &str, level: LogLevel) -> Self {
        Self {
            entry: Arc::new(ModuleEntry {
                name: ModuleName::new(name),
                level: AtomicU8::new(level.as_u8()),
                registered: AtomicBool::new(true),
            }),
        }
    }

    pub fn name(&self) -> &str {
        self.entry.name.as_str()
    }

    pub fn module_name(&self) -> &ModuleName {
        &self.entry.name
    }

    /// Minimum level this module emits
    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.entry.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Change the minimum level; takes effect for the next `log` call
    #[inline]
    pub fn set_level(&self, level: LogLevel) {
        self.entry.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Whether `level` passes this module's threshold
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// False once the module has been unregistered or its manager torn down
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.entry.registered.load(Ordering::Acquire)
    }

    /// Detach the handle; returns whether it was still registered
    pub(crate) fn detach(&self) -> bool {
        self.entry.registered.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn same_entry(&self, other: &ModuleHandle) -> bool {
        Arc::ptr_eq(&self.entry, &other.entry)
    }
}

impl PartialEq for ModuleHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_entry(other)
    }
}

impl Eq for ModuleHandle {}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("name", &self.entry.name)
            .field("level", &self.level())
            .field("registered", &self.is_registered())
            .finish()
    }
}
