//! Unordered store of registered modules

use super::error::{Result, UlogError};
use super::module::ModuleHandle;

/// Unordered collection of module handles
///
/// Removal is by identity and does not preserve order. An optional limit
/// caps how many modules may be held at once.
#[derive(Debug, Default)]
pub struct ModuleCollection {
    items: Vec<ModuleHandle>,
    limit: Option<usize>,
}

impl ModuleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    pub fn insert(&mut self, module: ModuleHandle) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.items.len() >= limit {
                return Err(UlogError::collection(format!(
                    "collection full: {}/{} modules",
                    self.items.len(),
                    limit
                )));
            }
        }

        if self.contains(&module) {
            return Err(UlogError::collection(format!(
                "module '{}' already present",
                module.name()
            )));
        }

        self.items.try_reserve(1).map_err(|e| {
            UlogError::allocation(std::mem::size_of::<ModuleHandle>(), e)
        })?;
        self.items.push(module);
        Ok(())
    }

    pub fn remove(&mut self, module: &ModuleHandle) -> Result<()> {
        match self.items.iter().position(|m| m.same_entry(module)) {
            Some(idx) => {
                self.items.swap_remove(idx);
                Ok(())
            }
            None => Err(UlogError::collection(format!(
                "module '{}' not found",
                module.name()
            ))),
        }
    }

    pub fn contains(&self, module: &ModuleHandle) -> bool {
        self.items.iter().any(|m| m.same_entry(module))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleHandle> {
        self.items.iter()
    }

    /// Remove every module, handing them back to the caller
    pub fn drain(&mut self) -> std::vec::Drain<'_, ModuleHandle> {
        self.items.drain(..)
    }
}

impl<'a> IntoIterator for &'a ModuleCollection {
    type Item = &'a ModuleHandle;
    type IntoIter = std::slice::Iter<'a, ModuleHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
