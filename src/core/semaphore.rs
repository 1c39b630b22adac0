//! Binary counting semaphore guarding the scratch buffer
//!
//! Starts with one permit. Waiting blocks without timeout; once the
//! semaphore is destroyed every wait and post fails with `EINVAL`, which
//! wakes any thread still blocked on it.

use super::error::{Result, UlogError, EINVAL, EOVERFLOW};
use parking_lot::{Condvar, Mutex};

#[derive(Debug)]
struct SemState {
    count: usize,
    destroyed: bool,
}

#[derive(Debug)]
pub struct BinarySemaphore {
    state: Mutex<SemState>,
    available: Condvar,
}

impl BinarySemaphore {
    const MAX_PERMITS: usize = 1;

    /// Create an available semaphore (count = 1)
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SemState {
                count: Self::MAX_PERMITS,
                destroyed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Block until the permit is available and take it
    pub fn wait(&self) -> Result<SemaphorePermit<'_>> {
        let mut state = self.state.lock();
        loop {
            if state.destroyed {
                return Err(UlogError::primitive("sem_wait", EINVAL));
            }
            if state.count > 0 {
                state.count -= 1;
                return Ok(SemaphorePermit {
                    sem: self,
                    released: false,
                });
            }
            self.available.wait(&mut state);
        }
    }

    /// Return a permit; fails if the semaphore is destroyed or already full
    pub fn post(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.destroyed {
            return Err(UlogError::primitive("sem_post", EINVAL));
        }
        if state.count >= Self::MAX_PERMITS {
            return Err(UlogError::primitive("sem_post", EOVERFLOW));
        }
        state.count += 1;
        self.available.notify_one();
        Ok(())
    }

    /// Mark the semaphore destroyed and wake all waiters
    pub fn destroy(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.destroyed {
            return Err(UlogError::primitive("sem_destroy", EINVAL));
        }
        state.destroyed = true;
        self.available.notify_all();
        Ok(())
    }

    pub fn available_permits(&self) -> usize {
        self.state.lock().count
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.lock().destroyed
    }
}

impl Default for BinarySemaphore {
    fn default() -> Self {
        Self::new()
    }
}

/// Held permit; posted back on `release` or when dropped
#[must_use = "dropping the permit releases the semaphore immediately"]
pub struct SemaphorePermit<'a> {
    sem: &'a BinarySemaphore,
    released: bool,
}

impl SemaphorePermit<'_> {
    /// Post the permit back, reporting primitive failures
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.sem.post()
    }
}

impl Drop for SemaphorePermit<'_> {
    fn drop(&mut self) {
        if !self.released {
            let _ = self.sem.post();
        }
    }
}
